//! Depot access to the injected application context.

use std::sync::Arc;

use garage_app::context::AppContext;
use salvo::prelude::{Depot, StatusError};
use tracing::error;

use crate::state::State;

pub(crate) trait DepotExt {
    /// The services injected by the `affix_state` hoop.
    ///
    /// A missing state is a routing mistake, so it is logged and surfaces as 500.
    fn app_or_500(&self) -> Result<&AppContext, StatusError>;
}

impl DepotExt for Depot {
    fn app_or_500(&self) -> Result<&AppContext, StatusError> {
        match self.obtain::<Arc<State>>() {
            Ok(state) => Ok(&state.app),
            Err(_missing) => {
                error!("application state was not injected for this route");

                Err(StatusError::internal_server_error())
            }
        }
    }
}
