//! Customer Errors

use salvo::http::StatusError;
use tracing::error;

use garage_app::domain::customers::CustomersServiceError;

pub(crate) fn into_status_error(error: CustomersServiceError) -> StatusError {
    match error {
        CustomersServiceError::AlreadyExists => {
            StatusError::conflict().brief("A customer with this tax id already exists")
        }
        CustomersServiceError::Invalid(source) => {
            StatusError::bad_request().brief(source.to_string())
        }
        CustomersServiceError::MissingRequiredData | CustomersServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid customer payload")
        }
        CustomersServiceError::NotFound => StatusError::not_found().brief("Customer not found"),
        CustomersServiceError::Sql(source) => {
            error!("customer storage failure: {source}");

            StatusError::internal_server_error()
        }
    }
}
