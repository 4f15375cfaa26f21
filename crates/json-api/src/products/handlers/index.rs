//! Product Index Handler

use salvo::{
    oapi::{ToSchema, extract::QueryParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use crate::{
    extensions::*,
    products::{errors::into_status_error, get::ProductResponse},
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductsResponse {
    /// Matching products ordered by name
    pub products: Vec<ProductResponse>,
}

/// Product Index Handler
///
/// Returns products whose name or SKU contains `q`, or every product when
/// `q` is absent or blank.
#[endpoint(tags("products"), summary = "Search Products")]
pub(crate) async fn handler(
    q: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<ProductsResponse>, StatusError> {
    let app = depot.app_or_500()?;

    let products = app.products
        .search_products(q.into_inner())
        .await
        .map_err(into_status_error)?;

    Ok(Json(ProductsResponse {
        products: products.into_iter().map(Into::into).collect(),
    }))
}
