//! Create Customer Handler

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use garage_app::domain::customers::data::NewCustomer;

use crate::{
    customers::{
        errors::into_status_error,
        get::{AddressBody, CustomerResponse},
    },
    extensions::*,
};

/// Customer Request
///
/// Used for both creation and full replacement.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CustomerRequest {
    pub name: String,

    pub tax_id: String,

    #[serde(default)]
    pub phone: Option<String>,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub address: AddressBody,
}

impl From<CustomerRequest> for NewCustomer {
    fn from(request: CustomerRequest) -> Self {
        NewCustomer {
            name: request.name,
            tax_id: request.tax_id,
            phone: request.phone,
            email: request.email,
            address: request.address.into(),
        }
    }
}

/// Create Customer Handler
#[endpoint(
    tags("customers"),
    summary = "Create Customer",
    responses(
        (status_code = StatusCode::CREATED, description = "Customer created"),
        (status_code = StatusCode::CONFLICT, description = "Tax id already in use"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CustomerRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CustomerResponse>, StatusError> {
    let app = depot.app_or_500()?;

    let customer = app.customers
        .create_customer(json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/customers/{}", customer.id), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(customer.into()))
}
