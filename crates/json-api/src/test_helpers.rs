//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{affix_state::inject, prelude::*};

use garage_app::{
    context::AppContext,
    domain::{
        customers::{
            MockCustomersService,
            data::Address,
            records::{CustomerId, CustomerRecord},
        },
        products::{
            MockProductsService,
            data::DEFAULT_REORDER_THRESHOLD,
            records::{ProductId, ProductRecord},
        },
    },
};

use crate::state::State;

/// Mocks without expectations panic on any call.
fn state_with(products: MockProductsService, customers: MockCustomersService) -> Arc<State> {
    State::from_app_context(AppContext::from_services(
        Arc::new(products),
        Arc::new(customers),
    ))
}

pub(crate) fn products_service(products: MockProductsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with(products, MockCustomersService::new())))
            .push(route),
    )
}

pub(crate) fn customers_service(customers: MockCustomersService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with(MockProductsService::new(), customers)))
            .push(route),
    )
}

pub(crate) fn make_product(id: i64) -> ProductRecord {
    ProductRecord {
        id: ProductId::from_i64(id),
        name: "Brake Pad".to_string(),
        sku: "BP-001".to_string(),
        tax_code: None,
        quantity: 10,
        cost: 25.0,
        reorder_threshold: DEFAULT_REORDER_THRESHOLD,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_customer(id: i64) -> CustomerRecord {
    CustomerRecord {
        id: CustomerId::from_i64(id),
        name: "Maria Souza".to_string(),
        tax_id: "123.456.789-00".to_string(),
        phone: None,
        email: None,
        address: Address::default(),
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}
