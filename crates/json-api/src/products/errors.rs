//! Product Errors

use salvo::http::StatusError;
use tracing::error;

use garage_app::domain::products::ProductsServiceError;

pub(crate) fn into_status_error(error: ProductsServiceError) -> StatusError {
    match error {
        ProductsServiceError::AlreadyExists => {
            StatusError::conflict().brief("A product with this SKU already exists")
        }
        ProductsServiceError::InsufficientStock { .. } => StatusError::conflict()
            .brief("Insufficient stock")
            .detail(error.to_string()),
        ProductsServiceError::Invalid(source) => {
            StatusError::bad_request().brief(source.to_string())
        }
        ProductsServiceError::MissingRequiredData | ProductsServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid product payload")
        }
        ProductsServiceError::NotFound => StatusError::not_found().brief("Product not found"),
        ProductsServiceError::Sql(source) => {
            error!("product storage failure: {source}");

            StatusError::internal_server_error()
        }
    }
}
