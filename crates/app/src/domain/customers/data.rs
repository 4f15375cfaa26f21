//! Customers Data

use crate::domain::validation::{self, ValidationError};

pub const NAME_MAX_CHARS: usize = 100;
pub const TAX_ID_MAX_CHARS: usize = 20;
pub const PHONE_MAX_CHARS: usize = 20;
pub const EMAIL_MAX_CHARS: usize = 100;
pub const STREET_MAX_CHARS: usize = 100;
pub const NUMBER_MAX_CHARS: usize = 10;
pub const DISTRICT_MAX_CHARS: usize = 50;
pub const CITY_MAX_CHARS: usize = 50;
pub const STATE_MAX_CHARS: usize = 2;
pub const POSTAL_CODE_MAX_CHARS: usize = 10;

/// Postal address; every part is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Address {
    pub street: Option<String>,
    pub number: Option<String>,
    pub district: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
}

impl Address {
    /// # Errors
    ///
    /// Returns the first part that exceeds its length limit.
    pub fn validated(self) -> Result<Self, ValidationError> {
        Ok(Self {
            street: validation::optional("street", self.street.as_deref(), STREET_MAX_CHARS)?,
            number: validation::optional("number", self.number.as_deref(), NUMBER_MAX_CHARS)?,
            district: validation::optional(
                "district",
                self.district.as_deref(),
                DISTRICT_MAX_CHARS,
            )?,
            city: validation::optional("city", self.city.as_deref(), CITY_MAX_CHARS)?,
            state: validation::optional("state", self.state.as_deref(), STATE_MAX_CHARS)?,
            postal_code: validation::optional(
                "postal_code",
                self.postal_code.as_deref(),
                POSTAL_CODE_MAX_CHARS,
            )?,
        })
    }
}

/// New Customer Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCustomer {
    pub name: String,
    pub tax_id: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Address,
}

/// Customer Update Data. Every customer field is editable.
pub type CustomerUpdate = NewCustomer;

impl NewCustomer {
    /// Trim text fields, drop blank optionals and check every limit.
    ///
    /// # Errors
    ///
    /// Returns the first field that fails validation.
    pub fn validated(self) -> Result<Self, ValidationError> {
        Ok(Self {
            name: validation::required("name", &self.name, NAME_MAX_CHARS)?,
            tax_id: validation::required("tax_id", &self.tax_id, TAX_ID_MAX_CHARS)?,
            phone: validation::optional("phone", self.phone.as_deref(), PHONE_MAX_CHARS)?,
            email: validation::optional("email", self.email.as_deref(), EMAIL_MAX_CHARS)?,
            address: self.address.validated()?,
        })
    }
}
