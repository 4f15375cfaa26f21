//! Test Helpers

use crate::domain::{
    customers::data::{Address, NewCustomer},
    products::data::{DEFAULT_REORDER_THRESHOLD, NewProduct},
};

pub(crate) fn new_product(name: &str, sku: &str, quantity: u64) -> NewProduct {
    NewProduct {
        name: name.to_string(),
        sku: sku.to_string(),
        tax_code: None,
        quantity,
        cost: 25.0,
        reorder_threshold: DEFAULT_REORDER_THRESHOLD,
    }
}

pub(crate) fn new_customer(name: &str, tax_id: &str) -> NewCustomer {
    NewCustomer {
        name: name.to_string(),
        tax_id: tax_id.to_string(),
        phone: None,
        email: None,
        address: Address::default(),
    }
}
