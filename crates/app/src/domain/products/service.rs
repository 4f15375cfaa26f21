//! Products service.

use async_trait::async_trait;
use mockall::automock;
use tracing::{info, warn};

use crate::{
    database::Db,
    domain::{
        products::{
            data::{MovementDirection, NewProduct, ProductUpdate, StockMovement},
            errors::ProductsServiceError,
            records::{ProductId, ProductRecord},
            repository::PgProductsRepository,
        },
        validation,
    },
};

#[derive(Debug, Clone)]
pub struct PgProductsService {
    db: Db,
    repository: PgProductsRepository,
}

impl PgProductsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgProductsRepository::new(),
        }
    }
}

#[async_trait]
impl ProductsService for PgProductsService {
    async fn search_products(
        &self,
        term: Option<String>,
    ) -> Result<Vec<ProductRecord>, ProductsServiceError> {
        let term = validation::search_term(term);
        let mut tx = self.db.begin().await?;

        let products = self
            .repository
            .search_products(&mut tx, term.as_deref())
            .await?;

        tx.commit().await?;

        Ok(products)
    }

    async fn get_product(&self, product: ProductId) -> Result<ProductRecord, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let product = self.repository.get_product(&mut tx, product).await?;

        tx.commit().await?;

        Ok(product)
    }

    async fn create_product(
        &self,
        product: NewProduct,
    ) -> Result<ProductRecord, ProductsServiceError> {
        let product = product.validated()?;
        let mut tx = self.db.begin().await?;

        let created = self.repository.create_product(&mut tx, &product).await?;

        tx.commit().await?;

        info!(product_id = %created.id, sku = %created.sku, "created product");

        Ok(created)
    }

    async fn update_product(
        &self,
        product: ProductId,
        update: ProductUpdate,
    ) -> Result<ProductRecord, ProductsServiceError> {
        let update = update.validated()?;
        let mut tx = self.db.begin().await?;

        let updated = self
            .repository
            .update_product(&mut tx, product, &update)
            .await?;

        tx.commit().await?;

        info!(product_id = %updated.id, "updated product");

        Ok(updated)
    }

    async fn apply_movement(
        &self,
        product: ProductId,
        movement: StockMovement,
    ) -> Result<ProductRecord, ProductsServiceError> {
        let StockMovement { direction, amount } = movement.validated()?;
        let mut tx = self.db.begin().await?;

        let moved = match direction {
            MovementDirection::Increase => {
                self.repository
                    .increase_stock(&mut tx, product, amount)
                    .await?
            }
            MovementDirection::Decrease => {
                self.repository
                    .decrease_stock(&mut tx, product, amount)
                    .await?
            }
        };

        let Some(moved) = moved else {
            return Err(match direction {
                // An increase only misses when the row does not exist.
                MovementDirection::Increase => ProductsServiceError::NotFound,
                MovementDirection::Decrease => {
                    // The guard refused, or the row does not exist.
                    let current = self.repository.get_product(&mut tx, product).await?;

                    warn!(
                        product_id = %product,
                        available = current.quantity,
                        requested = amount,
                        "rejected stock decrease"
                    );

                    ProductsServiceError::InsufficientStock {
                        available: current.quantity,
                        requested: amount,
                    }
                }
            });
        };

        tx.commit().await?;

        info!(
            product_id = %moved.id,
            ?direction,
            amount,
            quantity = moved.quantity,
            "applied stock movement"
        );

        Ok(moved)
    }

    async fn delete_product(&self, product: ProductId) -> Result<(), ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self.repository.delete_product(&mut tx, product).await?;

        if rows_affected == 0 {
            return Err(ProductsServiceError::NotFound);
        }

        tx.commit().await?;

        info!(product_id = %product, "deleted product");

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Products whose name or SKU contains `term`, ordered by name.
    /// A missing or blank term lists every product.
    async fn search_products(
        &self,
        term: Option<String>,
    ) -> Result<Vec<ProductRecord>, ProductsServiceError>;

    /// Retrieve a single product.
    async fn get_product(&self, product: ProductId) -> Result<ProductRecord, ProductsServiceError>;

    /// Creates a new product. SKUs are unique.
    async fn create_product(
        &self,
        product: NewProduct,
    ) -> Result<ProductRecord, ProductsServiceError>;

    /// Replaces every editable field. Quantity is never touched.
    async fn update_product(
        &self,
        product: ProductId,
        update: ProductUpdate,
    ) -> Result<ProductRecord, ProductsServiceError>;

    /// Moves stock in or out. A decrease never takes quantity below zero.
    async fn apply_movement(
        &self,
        product: ProductId,
        movement: StockMovement,
    ) -> Result<ProductRecord, ProductsServiceError>;

    /// Permanently deletes a product.
    async fn delete_product(&self, product: ProductId) -> Result<(), ProductsServiceError>;
}
