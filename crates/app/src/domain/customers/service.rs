//! Customers service.

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use crate::{
    database::Db,
    domain::{
        customers::{
            data::{CustomerUpdate, NewCustomer},
            errors::CustomersServiceError,
            records::{CustomerId, CustomerRecord},
            repository::PgCustomersRepository,
        },
        validation,
    },
};

#[derive(Debug, Clone)]
pub struct PgCustomersService {
    db: Db,
    repository: PgCustomersRepository,
}

impl PgCustomersService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgCustomersRepository::new(),
        }
    }
}

#[async_trait]
impl CustomersService for PgCustomersService {
    async fn search_customers(
        &self,
        term: Option<String>,
    ) -> Result<Vec<CustomerRecord>, CustomersServiceError> {
        let term = validation::search_term(term);
        let mut tx = self.db.begin().await?;

        let customers = self
            .repository
            .search_customers(&mut tx, term.as_deref())
            .await?;

        tx.commit().await?;

        Ok(customers)
    }

    async fn get_customer(
        &self,
        customer: CustomerId,
    ) -> Result<CustomerRecord, CustomersServiceError> {
        let mut tx = self.db.begin().await?;

        let customer = self.repository.get_customer(&mut tx, customer).await?;

        tx.commit().await?;

        Ok(customer)
    }

    async fn create_customer(
        &self,
        customer: NewCustomer,
    ) -> Result<CustomerRecord, CustomersServiceError> {
        let customer = customer.validated()?;
        let mut tx = self.db.begin().await?;

        let created = self.repository.create_customer(&mut tx, &customer).await?;

        tx.commit().await?;

        info!(customer_id = %created.id, "created customer");

        Ok(created)
    }

    async fn update_customer(
        &self,
        customer: CustomerId,
        update: CustomerUpdate,
    ) -> Result<CustomerRecord, CustomersServiceError> {
        let update = update.validated()?;
        let mut tx = self.db.begin().await?;

        let updated = self
            .repository
            .update_customer(&mut tx, customer, &update)
            .await?;

        tx.commit().await?;

        info!(customer_id = %updated.id, "updated customer");

        Ok(updated)
    }

    async fn delete_customer(&self, customer: CustomerId) -> Result<(), CustomersServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self.repository.delete_customer(&mut tx, customer).await?;

        if rows_affected == 0 {
            return Err(CustomersServiceError::NotFound);
        }

        tx.commit().await?;

        info!(customer_id = %customer, "deleted customer");

        Ok(())
    }
}

#[automock]
#[async_trait]
/// Customer record operations.
pub trait CustomersService: Send + Sync {
    /// Customers whose name or tax id contains `term`, ordered by name.
    async fn search_customers(
        &self,
        term: Option<String>,
    ) -> Result<Vec<CustomerRecord>, CustomersServiceError>;

    async fn get_customer(
        &self,
        customer: CustomerId,
    ) -> Result<CustomerRecord, CustomersServiceError>;

    /// Creates a new customer. Tax ids are unique.
    async fn create_customer(
        &self,
        customer: NewCustomer,
    ) -> Result<CustomerRecord, CustomersServiceError>;

    async fn update_customer(
        &self,
        customer: CustomerId,
        update: CustomerUpdate,
    ) -> Result<CustomerRecord, CustomersServiceError>;

    /// Permanently deletes a customer.
    async fn delete_customer(&self, customer: CustomerId) -> Result<(), CustomersServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{
        domain::customers::data::Address,
        test::{TestContext, helpers::new_customer},
    };

    use super::*;

    #[tokio::test]
    async fn create_customer_persists_address() -> TestResult {
        let ctx = TestContext::new().await;

        let customer = ctx
            .customers
            .create_customer(NewCustomer {
                email: Some("maria@example.com".to_owned()),
                address: Address {
                    street: Some("Rua das Flores".to_owned()),
                    number: Some("42".to_owned()),
                    district: Some("Centro".to_owned()),
                    city: Some("Campinas".to_owned()),
                    state: Some("SP".to_owned()),
                    postal_code: Some("13010-000".to_owned()),
                },
                ..new_customer("Maria Souza", "123.456.789-00")
            })
            .await?;

        let fetched = ctx.customers.get_customer(customer.id).await?;

        assert_eq!(fetched, customer);
        assert_eq!(fetched.address.state.as_deref(), Some("SP"));
        assert_eq!(fetched.email.as_deref(), Some("maria@example.com"));

        Ok(())
    }

    #[tokio::test]
    async fn create_customer_without_optional_fields() -> TestResult {
        let ctx = TestContext::new().await;

        let customer = ctx
            .customers
            .create_customer(new_customer("Auto Peças Ltda", "12.345.678/0001-90"))
            .await?;

        assert_eq!(customer.phone, None);
        assert_eq!(customer.address, Address::default());

        Ok(())
    }

    #[tokio::test]
    async fn create_customer_duplicate_tax_id_returns_already_exists() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.customers
            .create_customer(new_customer("Maria Souza", "123.456.789-00"))
            .await?;

        let result = ctx
            .customers
            .create_customer(new_customer("Someone Else", "123.456.789-00"))
            .await;

        assert!(
            matches!(result, Err(CustomersServiceError::AlreadyExists)),
            "expected AlreadyExists, got {result:?}"
        );

        assert_eq!(ctx.customers.search_customers(None).await?.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn create_customer_missing_name_is_invalid() {
        let ctx = TestContext::new().await;

        let result = ctx
            .customers
            .create_customer(new_customer("", "123.456.789-00"))
            .await;

        assert!(
            matches!(result, Err(CustomersServiceError::Invalid(_))),
            "expected Invalid, got {result:?}"
        );
    }

    #[tokio::test]
    async fn search_matches_name_or_tax_id() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.customers
            .create_customer(new_customer("Maria Souza", "111.111.111-11"))
            .await?;
        ctx.customers
            .create_customer(new_customer("João Lima", "222.222.222-22"))
            .await?;
        ctx.customers
            .create_customer(new_customer("Ana Maria", "333.333.333-33"))
            .await?;

        let by_name: Vec<String> = ctx
            .customers
            .search_customers(Some("Maria".to_owned()))
            .await?
            .into_iter()
            .map(|c| c.name)
            .collect();

        assert_eq!(by_name, ["Ana Maria", "Maria Souza"]);

        let by_tax_id = ctx
            .customers
            .search_customers(Some("222".to_owned()))
            .await?;

        assert_eq!(by_tax_id.len(), 1);
        assert_eq!(by_tax_id[0].name, "João Lima");

        let everyone: Vec<String> = ctx
            .customers
            .search_customers(None)
            .await?
            .into_iter()
            .map(|c| c.name)
            .collect();

        assert_eq!(everyone, ["Ana Maria", "João Lima", "Maria Souza"]);

        Ok(())
    }

    #[tokio::test]
    async fn update_customer_replaces_all_fields() -> TestResult {
        let ctx = TestContext::new().await;

        let customer = ctx
            .customers
            .create_customer(NewCustomer {
                phone: Some("11 5555-0100".to_owned()),
                ..new_customer("Maria Souza", "123.456.789-00")
            })
            .await?;

        let updated = ctx
            .customers
            .update_customer(
                customer.id,
                NewCustomer {
                    address: Address {
                        city: Some("Santos".to_owned()),
                        ..Address::default()
                    },
                    ..new_customer("Maria S. Lima", "123.456.789-00")
                },
            )
            .await?;

        assert_eq!(updated.id, customer.id);
        assert_eq!(updated.name, "Maria S. Lima");
        assert_eq!(updated.phone, None);
        assert_eq!(updated.address.city.as_deref(), Some("Santos"));

        Ok(())
    }

    #[tokio::test]
    async fn update_customer_to_taken_tax_id_returns_already_exists() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.customers
            .create_customer(new_customer("Maria Souza", "111.111.111-11"))
            .await?;
        let other = ctx
            .customers
            .create_customer(new_customer("João Lima", "222.222.222-22"))
            .await?;

        let result = ctx
            .customers
            .update_customer(other.id, new_customer("João Lima", "111.111.111-11"))
            .await;

        assert!(
            matches!(result, Err(CustomersServiceError::AlreadyExists)),
            "expected AlreadyExists, got {result:?}"
        );

        assert_eq!(ctx.customers.get_customer(other.id).await?, other);

        Ok(())
    }

    #[tokio::test]
    async fn update_customer_unknown_id_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx
            .customers
            .update_customer(
                CustomerId::from_i64(404),
                new_customer("Ghost", "000.000.000-00"),
            )
            .await;

        assert!(
            matches!(result, Err(CustomersServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn delete_customer_makes_it_not_found() -> TestResult {
        let ctx = TestContext::new().await;

        let customer = ctx
            .customers
            .create_customer(new_customer("Maria Souza", "123.456.789-00"))
            .await?;

        ctx.customers.delete_customer(customer.id).await?;

        let result = ctx.customers.get_customer(customer.id).await;

        assert!(
            matches!(result, Err(CustomersServiceError::NotFound)),
            "expected NotFound after deletion, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn delete_customer_unknown_id_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx
            .customers
            .delete_customer(CustomerId::from_i64(404))
            .await;

        assert!(
            matches!(result, Err(CustomersServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }
}
