//! Product Records

use jiff::Timestamp;

use crate::ids::TypedId;

/// Product Id
pub type ProductId = TypedId<ProductRecord>;

/// Product Record
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRecord {
    pub id: ProductId,
    pub name: String,
    pub sku: String,
    pub tax_code: Option<String>,
    pub quantity: u64,
    pub cost: f64,
    pub reorder_threshold: u64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl ProductRecord {
    /// Whether stock has dropped to the advisory reorder threshold.
    #[must_use]
    pub fn needs_reorder(&self) -> bool {
        self.quantity <= self.reorder_threshold
    }
}
