//! Customer Records

use jiff::Timestamp;

use crate::{domain::customers::data::Address, ids::TypedId};

/// Customer Id
pub type CustomerId = TypedId<CustomerRecord>;

/// Customer Record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerRecord {
    pub id: CustomerId,
    pub name: String,
    pub tax_id: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Address,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
