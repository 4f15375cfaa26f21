//! Update Customer Handler

use salvo::{
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};

use garage_app::domain::customers::records::CustomerId;

use crate::{
    customers::{create::CustomerRequest, errors::into_status_error, get::CustomerResponse},
    extensions::*,
};

/// Customer Update Handler
///
/// Replaces every customer field.
#[endpoint(
    tags("customers"),
    summary = "Update Customer",
    responses(
        (status_code = StatusCode::OK, description = "Customer updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Customer not found"),
        (status_code = StatusCode::CONFLICT, description = "Tax id already in use"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    customer: PathParam<i64>,
    json: JsonBody<CustomerRequest>,
    depot: &mut Depot,
) -> Result<Json<CustomerResponse>, StatusError> {
    let app = depot.app_or_500()?;

    let customer = app.customers
        .update_customer(
            CustomerId::from_i64(customer.into_inner()),
            json.into_inner().into(),
        )
        .await
        .map_err(into_status_error)?;

    Ok(Json(customer.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use garage_app::domain::customers::{
        CustomersServiceError, MockCustomersService, records::CustomerRecord,
    };

    use crate::test_helpers::{customers_service, make_customer};

    use super::*;

    fn make_service(repo: MockCustomersService) -> Service {
        customers_service(repo, Router::with_path("customers/{customer}").put(handler))
    }

    #[tokio::test]
    async fn test_update_customer_success() -> TestResult {
        let mut repo = MockCustomersService::new();

        repo.expect_update_customer()
            .once()
            .withf(|id, update| {
                *id == CustomerId::from_i64(3)
                    && update.name == "Maria S. Lima"
                    && update.email.as_deref() == Some("maria@example.com")
            })
            .return_once(|_, _| {
                Ok(CustomerRecord {
                    name: "Maria S. Lima".to_string(),
                    email: Some("maria@example.com".to_string()),
                    ..make_customer(3)
                })
            });

        let mut res = TestClient::put("http://example.com/customers/3")
            .json(&json!({
                "name": "Maria S. Lima",
                "tax_id": "123.456.789-00",
                "email": "maria@example.com",
            }))
            .send(&make_service(repo))
            .await;

        let body: CustomerResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.name, "Maria S. Lima");

        Ok(())
    }

    #[tokio::test]
    async fn test_update_customer_tax_id_collision_returns_409() {
        let mut repo = MockCustomersService::new();

        repo.expect_update_customer()
            .once()
            .return_once(|_, _| Err(CustomersServiceError::AlreadyExists));

        let res = TestClient::put("http://example.com/customers/3")
            .json(&json!({ "name": "Maria Souza", "tax_id": "222.222.222-22" }))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CONFLICT));
    }

    #[tokio::test]
    async fn test_update_customer_not_found_returns_404() {
        let mut repo = MockCustomersService::new();

        repo.expect_update_customer()
            .once()
            .return_once(|_, _| Err(CustomersServiceError::NotFound));

        let res = TestClient::put("http://example.com/customers/404")
            .json(&json!({ "name": "Ghost", "tax_id": "000" }))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
    }
}
