//! Customer Index Handler

use salvo::{
    oapi::{ToSchema, extract::QueryParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use crate::{
    customers::{errors::into_status_error, get::CustomerResponse},
    extensions::*,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CustomersResponse {
    /// Matching customers ordered by name
    pub customers: Vec<CustomerResponse>,
}

/// Customer Index Handler
///
/// Returns customers whose name or tax id contains `q`.
#[endpoint(tags("customers"), summary = "Search Customers")]
pub(crate) async fn handler(
    q: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<CustomersResponse>, StatusError> {
    let app = depot.app_or_500()?;

    let customers = app.customers
        .search_customers(q.into_inner())
        .await
        .map_err(into_status_error)?;

    Ok(Json(CustomersResponse {
        customers: customers.into_iter().map(Into::into).collect(),
    }))
}
