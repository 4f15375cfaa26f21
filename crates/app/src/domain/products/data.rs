//! Products Data

use crate::domain::validation::{self, ValidationError};

pub const NAME_MAX_CHARS: usize = 100;
pub const SKU_MAX_CHARS: usize = 20;
pub const TAX_CODE_MAX_CHARS: usize = 8;

/// Reorder threshold applied when none is given.
pub const DEFAULT_REORDER_THRESHOLD: u64 = 5;

/// New Product Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub sku: String,
    pub tax_code: Option<String>,
    pub quantity: u64,
    pub cost: f64,
    pub reorder_threshold: u64,
}

impl NewProduct {
    /// Trim text fields, drop blank optionals and check every limit.
    ///
    /// # Errors
    ///
    /// Returns the first field that fails validation.
    pub fn validated(self) -> Result<Self, ValidationError> {
        Ok(Self {
            name: validation::required("name", &self.name, NAME_MAX_CHARS)?,
            sku: validation::required("sku", &self.sku, SKU_MAX_CHARS)?,
            tax_code: validation::optional(
                "tax_code",
                self.tax_code.as_deref(),
                TAX_CODE_MAX_CHARS,
            )?,
            quantity: validation::storable("quantity", self.quantity)?,
            cost: validation::non_negative("cost", self.cost)?,
            reorder_threshold: validation::storable("reorder_threshold", self.reorder_threshold)?,
        })
    }
}

/// Product Update Data
///
/// Quantity only changes through [`StockMovement`].
#[derive(Debug, Clone, PartialEq)]
pub struct ProductUpdate {
    pub name: String,
    pub sku: String,
    pub tax_code: Option<String>,
    pub cost: f64,
    pub reorder_threshold: u64,
}

impl ProductUpdate {
    /// Trim text fields, drop blank optionals and check every limit.
    ///
    /// # Errors
    ///
    /// Returns the first field that fails validation.
    pub fn validated(self) -> Result<Self, ValidationError> {
        Ok(Self {
            name: validation::required("name", &self.name, NAME_MAX_CHARS)?,
            sku: validation::required("sku", &self.sku, SKU_MAX_CHARS)?,
            tax_code: validation::optional(
                "tax_code",
                self.tax_code.as_deref(),
                TAX_CODE_MAX_CHARS,
            )?,
            cost: validation::non_negative("cost", self.cost)?,
            reorder_threshold: validation::storable("reorder_threshold", self.reorder_threshold)?,
        })
    }
}

/// Stock Movement Direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovementDirection {
    /// Goods received.
    Increase,

    /// Goods issued.
    Decrease,
}

/// Stock Movement Data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StockMovement {
    pub direction: MovementDirection,
    pub amount: u64,
}

impl StockMovement {
    #[must_use]
    pub const fn increase(amount: u64) -> Self {
        Self {
            direction: MovementDirection::Increase,
            amount,
        }
    }

    #[must_use]
    pub const fn decrease(amount: u64) -> Self {
        Self {
            direction: MovementDirection::Decrease,
            amount,
        }
    }

    /// # Errors
    ///
    /// Returns an error when the amount is zero or past the stored integer range.
    pub fn validated(self) -> Result<Self, ValidationError> {
        let amount = validation::positive("amount", self.amount)?;

        Ok(Self {
            direction: self.direction,
            amount: validation::storable("amount", amount)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::domain::validation::ValidationReason;

    use super::*;

    fn brake_pad() -> NewProduct {
        NewProduct {
            name: "Brake Pad".to_owned(),
            sku: "BP-001".to_owned(),
            tax_code: None,
            quantity: 10,
            cost: 25.0,
            reorder_threshold: DEFAULT_REORDER_THRESHOLD,
        }
    }

    #[test]
    fn new_product_validation_normalises_text() -> TestResult {
        let product = NewProduct {
            name: " Brake Pad ".to_owned(),
            tax_code: Some("   ".to_owned()),
            ..brake_pad()
        }
        .validated()?;

        assert_eq!(product.name, "Brake Pad");
        assert_eq!(product.tax_code, None);

        Ok(())
    }

    #[test]
    fn new_product_requires_sku() {
        let result = NewProduct {
            sku: String::new(),
            ..brake_pad()
        }
        .validated();

        assert_eq!(
            result,
            Err(ValidationError::new("sku", ValidationReason::Required))
        );
    }

    #[test]
    fn new_product_rejects_negative_cost() {
        let result = NewProduct {
            cost: -1.0,
            ..brake_pad()
        }
        .validated();

        assert_eq!(
            result,
            Err(ValidationError::new(
                "cost",
                ValidationReason::NotANonNegativeNumber
            ))
        );
    }

    #[test]
    fn new_product_rejects_long_tax_code() {
        let result = NewProduct {
            tax_code: Some("870830999".to_owned()),
            ..brake_pad()
        }
        .validated();

        assert_eq!(
            result,
            Err(ValidationError::new(
                "tax_code",
                ValidationReason::TooLong(TAX_CODE_MAX_CHARS)
            ))
        );
    }

    #[test]
    fn product_update_rejects_blank_name() {
        let result = ProductUpdate {
            name: "  ".to_owned(),
            sku: "BP-001".to_owned(),
            tax_code: None,
            cost: 1.0,
            reorder_threshold: 2,
        }
        .validated();

        assert_eq!(
            result,
            Err(ValidationError::new("name", ValidationReason::Required))
        );
    }

    #[test]
    fn zero_movement_is_rejected() {
        assert_eq!(
            StockMovement::decrease(0).validated(),
            Err(ValidationError::new("amount", ValidationReason::NotPositive))
        );
        assert_eq!(
            StockMovement::increase(4).validated(),
            Ok(StockMovement::increase(4))
        );
    }

    #[test]
    fn oversized_movement_is_rejected() {
        assert_eq!(
            StockMovement::increase(u64::MAX).validated(),
            Err(ValidationError::new("amount", ValidationReason::TooLarge))
        );
    }
}
