//! Delete Customer Handler

use salvo::{oapi::extract::PathParam, prelude::*};

use garage_app::domain::customers::records::CustomerId;

use crate::{customers::errors::into_status_error, extensions::*};

/// Delete Customer Handler
#[endpoint(
    tags("customers"),
    summary = "Delete Customer",
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Customer deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Customer not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    customer: PathParam<i64>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let app = depot.app_or_500()?;

    app.customers
        .delete_customer(CustomerId::from_i64(customer.into_inner()))
        .await
        .map_err(into_status_error)?;

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use salvo::test::TestClient;

    use garage_app::domain::customers::{CustomersServiceError, MockCustomersService};

    use crate::test_helpers::customers_service;

    use super::*;

    fn make_service(repo: MockCustomersService) -> Service {
        customers_service(repo, Router::with_path("customers/{customer}").delete(handler))
    }

    #[tokio::test]
    async fn test_delete_customer_success() {
        let mut repo = MockCustomersService::new();

        repo.expect_delete_customer()
            .once()
            .withf(|id| *id == CustomerId::from_i64(3))
            .return_once(|_| Ok(()));

        let res = TestClient::delete("http://example.com/customers/3")
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NO_CONTENT));
    }

    #[tokio::test]
    async fn test_delete_customer_not_found_returns_404() {
        let mut repo = MockCustomersService::new();

        repo.expect_delete_customer()
            .once()
            .return_once(|_| Err(CustomersServiceError::NotFound));

        let res = TestClient::delete("http://example.com/customers/404")
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
    }
}
