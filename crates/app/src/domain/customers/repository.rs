//! Customers Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};

use crate::domain::customers::{
    data::{Address, NewCustomer},
    records::{CustomerId, CustomerRecord},
};

const SEARCH_CUSTOMERS_SQL: &str = include_str!("sql/search_customers.sql");
const GET_CUSTOMER_SQL: &str = include_str!("sql/get_customer.sql");
const CREATE_CUSTOMER_SQL: &str = include_str!("sql/create_customer.sql");
const UPDATE_CUSTOMER_SQL: &str = include_str!("sql/update_customer.sql");
const DELETE_CUSTOMER_SQL: &str = include_str!("sql/delete_customer.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgCustomersRepository;

impl PgCustomersRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn search_customers(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        term: Option<&str>,
    ) -> Result<Vec<CustomerRecord>, sqlx::Error> {
        query_as::<Postgres, CustomerRecord>(SEARCH_CUSTOMERS_SQL)
            .bind(term)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn get_customer(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        customer: CustomerId,
    ) -> Result<CustomerRecord, sqlx::Error> {
        query_as::<Postgres, CustomerRecord>(GET_CUSTOMER_SQL)
            .bind(customer.into_i64())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn create_customer(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        customer: &NewCustomer,
    ) -> Result<CustomerRecord, sqlx::Error> {
        let Address {
            street,
            number,
            district,
            city,
            state,
            postal_code,
        } = &customer.address;

        query_as::<Postgres, CustomerRecord>(CREATE_CUSTOMER_SQL)
            .bind(&customer.name)
            .bind(&customer.tax_id)
            .bind(customer.phone.as_deref())
            .bind(customer.email.as_deref())
            .bind(street.as_deref())
            .bind(number.as_deref())
            .bind(district.as_deref())
            .bind(city.as_deref())
            .bind(state.as_deref())
            .bind(postal_code.as_deref())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn update_customer(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        customer: CustomerId,
        update: &NewCustomer,
    ) -> Result<CustomerRecord, sqlx::Error> {
        let Address {
            street,
            number,
            district,
            city,
            state,
            postal_code,
        } = &update.address;

        query_as::<Postgres, CustomerRecord>(UPDATE_CUSTOMER_SQL)
            .bind(customer.into_i64())
            .bind(&update.name)
            .bind(&update.tax_id)
            .bind(update.phone.as_deref())
            .bind(update.email.as_deref())
            .bind(street.as_deref())
            .bind(number.as_deref())
            .bind(district.as_deref())
            .bind(city.as_deref())
            .bind(state.as_deref())
            .bind(postal_code.as_deref())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn delete_customer(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        customer: CustomerId,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_CUSTOMER_SQL)
            .bind(customer.into_i64())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for CustomerRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: CustomerId::from_i64(row.try_get("id")?),
            name: row.try_get("name")?,
            tax_id: row.try_get("tax_id")?,
            phone: row.try_get("phone")?,
            email: row.try_get("email")?,
            address: Address {
                street: row.try_get("street")?,
                number: row.try_get("number")?,
                district: row.try_get("district")?,
                city: row.try_get("city")?,
                state: row.try_get("state")?,
                postal_code: row.try_get("postal_code")?,
            },
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
