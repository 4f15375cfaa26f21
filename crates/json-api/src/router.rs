//! App Router

use salvo::Router;

use crate::{customers, products};

/// Record routes, without state injection or middleware.
pub(crate) fn app_router() -> Router {
    Router::new()
        .push(
            Router::with_path("products")
                .get(products::index::handler)
                .post(products::create::handler)
                .push(
                    Router::with_path("{product}")
                        .get(products::get::handler)
                        .put(products::update::handler)
                        .delete(products::delete::handler)
                        .push(
                            Router::with_path("movements").post(products::movements::handler),
                        ),
                ),
        )
        .push(
            Router::with_path("customers")
                .get(customers::index::handler)
                .post(customers::create::handler)
                .push(
                    Router::with_path("{customer}")
                        .get(customers::get::handler)
                        .put(customers::update::handler)
                        .delete(customers::delete::handler),
                ),
        )
}

#[cfg(test)]
mod tests {
    use salvo::{prelude::*, test::TestClient};

    use garage_app::domain::{
        customers::MockCustomersService,
        products::{MockProductsService, records::ProductId},
    };

    use crate::test_helpers::{customers_service, make_customer, make_product, products_service};

    use super::*;

    #[tokio::test]
    async fn movements_route_reaches_product_handler() {
        let mut repo = MockProductsService::new();

        repo.expect_apply_movement()
            .once()
            .withf(|id, _| *id == ProductId::from_i64(9))
            .return_once(|_, _| Ok(make_product(9)));

        let res = TestClient::post("http://example.com/products/9/movements")
            .json(&serde_json::json!({ "direction": "increase", "amount": 2 }))
            .send(&products_service(repo, app_router()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));
    }

    #[tokio::test]
    async fn customer_routes_are_mounted() {
        let mut repo = MockCustomersService::new();

        repo.expect_get_customer()
            .once()
            .return_once(|_| Ok(make_customer(3)));

        let res = TestClient::get("http://example.com/customers/3")
            .send(&customers_service(repo, app_router()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));
    }

    #[tokio::test]
    async fn unknown_route_returns_404() {
        let res = TestClient::get("http://example.com/invoices")
            .send(&products_service(MockProductsService::new(), app_router()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
    }
}
