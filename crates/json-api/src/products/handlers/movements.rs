//! Stock Movement Handler

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};

use garage_app::domain::products::{
    data::{MovementDirection, StockMovement},
    records::ProductId,
};

use crate::{
    extensions::*,
    observability::observe_stock_movement,
    products::{errors::into_status_error, get::ProductResponse},
};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Direction {
    /// Goods received
    Increase,

    /// Goods issued
    Decrease,
}

impl From<Direction> for MovementDirection {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Increase => MovementDirection::Increase,
            Direction::Decrease => MovementDirection::Decrease,
        }
    }
}

/// Stock Movement Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct StockMovementRequest {
    pub direction: Direction,

    /// Units moved, greater than zero
    pub amount: u64,
}

impl From<StockMovementRequest> for StockMovement {
    fn from(request: StockMovementRequest) -> Self {
        StockMovement {
            direction: request.direction.into(),
            amount: request.amount,
        }
    }
}

/// Stock Movement Handler
///
/// Receives or issues stock. A decrease larger than the units on hand is
/// rejected and leaves the quantity unchanged.
#[endpoint(
    tags("products"),
    summary = "Move Stock",
    responses(
        (status_code = StatusCode::OK, description = "Stock moved"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::CONFLICT, description = "Insufficient stock"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "products.movements",
    skip(product, json, depot),
    fields(
        product_id = tracing::field::Empty,
        direction = tracing::field::Empty,
        amount = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(
    product: PathParam<i64>,
    json: JsonBody<StockMovementRequest>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, StatusError> {
    let app = depot.app_or_500()?;
    let movement = StockMovement::from(json.into_inner());
    let product = ProductId::from_i64(product.into_inner());

    let span = tracing::Span::current();

    span.record("product_id", tracing::field::display(product));
    span.record("direction", tracing::field::debug(movement.direction));
    span.record("amount", movement.amount);

    let direction = movement.direction;
    let moved = app.products.apply_movement(product, movement).await;

    observe_stock_movement(direction, &moved);

    let product = moved.map_err(into_status_error)?;

    Ok(Json(product.into()))
}
