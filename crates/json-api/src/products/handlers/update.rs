//! Update Product Handler

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};

use garage_app::domain::products::{
    data::ProductUpdate,
    records::ProductId,
};

use crate::{
    extensions::*,
    products::{errors::into_status_error, get::ProductResponse},
};

/// Update Product Request
///
/// Quantity is not editable here; use the movements endpoint.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateProductRequest {
    pub name: String,

    pub sku: String,

    #[serde(default)]
    pub tax_code: Option<String>,

    /// Required; a replacement never falls back to the creation default
    pub cost: f64,

    /// Required; a replacement never falls back to the creation default
    pub reorder_threshold: u64,
}

impl From<UpdateProductRequest> for ProductUpdate {
    fn from(request: UpdateProductRequest) -> Self {
        ProductUpdate {
            name: request.name,
            sku: request.sku,
            tax_code: request.tax_code,
            cost: request.cost,
            reorder_threshold: request.reorder_threshold,
        }
    }
}

/// Product Update Handler
#[endpoint(
    tags("products"),
    summary = "Update Product",
    responses(
        (status_code = StatusCode::OK, description = "Product updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::CONFLICT, description = "SKU already in use"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "products.update",
    skip(product, json, depot),
    fields(product_id = tracing::field::Empty, sku = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    product: PathParam<i64>,
    json: JsonBody<UpdateProductRequest>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, StatusError> {
    let app = depot.app_or_500()?;
    let request = json.into_inner();
    let product = ProductId::from_i64(product.into_inner());

    let span = tracing::Span::current();

    span.record("product_id", tracing::field::display(product));
    span.record("sku", tracing::field::display(&request.sku));

    let product = app.products
        .update_product(product, request.into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(product.into()))
}
