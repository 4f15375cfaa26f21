//! Get Customer Handler

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use garage_app::domain::customers::{
    data::Address,
    records::{CustomerId, CustomerRecord},
};

use crate::{customers::errors::into_status_error, extensions::*};

/// Postal address; every part is optional.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct AddressBody {
    #[serde(default)]
    pub street: Option<String>,

    #[serde(default)]
    pub number: Option<String>,

    #[serde(default)]
    pub district: Option<String>,

    #[serde(default)]
    pub city: Option<String>,

    /// Two-letter state code
    #[serde(default)]
    pub state: Option<String>,

    #[serde(default)]
    pub postal_code: Option<String>,
}

impl From<AddressBody> for Address {
    fn from(body: AddressBody) -> Self {
        Address {
            street: body.street,
            number: body.number,
            district: body.district,
            city: body.city,
            state: body.state,
            postal_code: body.postal_code,
        }
    }
}

impl From<Address> for AddressBody {
    fn from(address: Address) -> Self {
        AddressBody {
            street: address.street,
            number: address.number,
            district: address.district,
            city: address.city,
            state: address.state,
            postal_code: address.postal_code,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CustomerResponse {
    /// The unique identifier of the customer
    pub id: i64,

    pub name: String,

    /// Tax registration number, unique across customers
    pub tax_id: String,

    pub phone: Option<String>,

    pub email: Option<String>,

    pub address: AddressBody,

    /// The date and time the customer was created
    pub created_at: String,

    /// The date and time the customer was last updated
    pub updated_at: String,
}

impl From<CustomerRecord> for CustomerResponse {
    fn from(customer: CustomerRecord) -> Self {
        CustomerResponse {
            id: customer.id.into_i64(),
            name: customer.name,
            tax_id: customer.tax_id,
            phone: customer.phone,
            email: customer.email,
            address: customer.address.into(),
            created_at: customer.created_at.to_string(),
            updated_at: customer.updated_at.to_string(),
        }
    }
}

/// Get Customer Handler
#[endpoint(
    tags("customers"),
    summary = "Get Customer",
    responses(
        (status_code = StatusCode::OK, description = "Customer found"),
        (status_code = StatusCode::NOT_FOUND, description = "Customer not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
    ),
)]
pub(crate) async fn handler(
    customer: PathParam<i64>,
    depot: &mut Depot,
) -> Result<Json<CustomerResponse>, StatusError> {
    let app = depot.app_or_500()?;

    let customer = app.customers
        .get_customer(CustomerId::from_i64(customer.into_inner()))
        .await
        .map_err(into_status_error)?;

    Ok(Json(customer.into()))
}
