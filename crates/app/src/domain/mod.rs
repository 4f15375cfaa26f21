//! Garage Domain Concerns

pub mod customers;
pub mod products;
pub mod validation;
