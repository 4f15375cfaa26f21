//! Get Product Handler

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use garage_app::domain::products::records::{ProductId, ProductRecord};

use crate::{extensions::*, products::errors::into_status_error};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductResponse {
    /// The unique identifier of the product
    pub id: i64,

    pub name: String,

    /// Stock keeping unit, unique across products
    pub sku: String,

    /// Fiscal classification code
    pub tax_code: Option<String>,

    /// Units in stock
    pub quantity: u64,

    /// Unit acquisition cost
    pub cost: f64,

    /// Stock level at or below which the product should be reordered
    pub reorder_threshold: u64,

    /// Whether quantity is at or below the reorder threshold
    pub needs_reorder: bool,

    /// The date and time the product was created
    pub created_at: String,

    /// The date and time the product was last updated
    pub updated_at: String,
}

impl From<ProductRecord> for ProductResponse {
    fn from(product: ProductRecord) -> Self {
        ProductResponse {
            needs_reorder: product.needs_reorder(),
            id: product.id.into_i64(),
            name: product.name,
            sku: product.sku,
            tax_code: product.tax_code,
            quantity: product.quantity,
            cost: product.cost,
            reorder_threshold: product.reorder_threshold,
            created_at: product.created_at.to_string(),
            updated_at: product.updated_at.to_string(),
        }
    }
}

/// Get Product Handler
///
/// Returns a product.
#[endpoint(
    tags("products"),
    summary = "Get Product",
    responses(
        (status_code = StatusCode::OK, description = "Product found"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
    ),
)]
pub(crate) async fn handler(
    product: PathParam<i64>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, StatusError> {
    let app = depot.app_or_500()?;

    let product = app.products
        .get_product(ProductId::from_i64(product.into_inner()))
        .await
        .map_err(into_status_error)?;

    Ok(Json(product.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use garage_app::domain::products::{MockProductsService, ProductsServiceError};

    use crate::test_helpers::{make_product, products_service};

    use super::*;

    fn make_service(repo: MockProductsService) -> Service {
        products_service(repo, Router::with_path("products/{product}").get(handler))
    }

    #[tokio::test]
    async fn test_get_product_returns_product() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_get_product()
            .once()
            .withf(|id| *id == ProductId::from_i64(7))
            .return_once(|_| Ok(make_product(7)));

        let mut res = TestClient::get("http://example.com/products/7")
            .send(&make_service(repo))
            .await;

        let body: ProductResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.id, 7);
        assert_eq!(body.sku, "BP-001");
        assert_eq!(body.quantity, 10);
        assert!(!body.needs_reorder);

        Ok(())
    }

    #[tokio::test]
    async fn test_get_product_flags_low_stock() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_get_product().once().return_once(|_| {
            Ok(ProductRecord {
                quantity: 5,
                ..make_product(7)
            })
        });

        let body: ProductResponse = TestClient::get("http://example.com/products/7")
            .send(&make_service(repo))
            .await
            .take_json()
            .await?;

        assert!(body.needs_reorder);

        Ok(())
    }

    #[tokio::test]
    async fn test_get_product_not_found_returns_404() {
        let mut repo = MockProductsService::new();

        repo.expect_get_product()
            .once()
            .return_once(|_| Err(ProductsServiceError::NotFound));

        let res = TestClient::get("http://example.com/products/404")
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
    }

    #[tokio::test]
    async fn test_get_product_non_numeric_id_returns_400() {
        let mut repo = MockProductsService::new();

        repo.expect_get_product().never();

        let res = TestClient::get("http://example.com/products/BP-001")
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
    }
}
