//! Open payments: the list and the settle action.

use api_types::payables::{CloseRequest, CloseResponse, PayablesResponse};
use axum::{Json, extract::State};

use crate::server::{ServerState, lock};
use crate::views::map_record;
use crate::ServerError;

pub async fn list(
    State(state): State<ServerState>,
) -> Result<Json<PayablesResponse>, ServerError> {
    let items = lock(&state.ledger).payables()?;
    Ok(Json(PayablesResponse {
        items: items
            .iter()
            .map(|(position, record)| map_record(*position, record))
            .collect(),
    }))
}

pub async fn close(
    State(state): State<ServerState>,
    Json(payload): Json<CloseRequest>,
) -> Result<Json<CloseResponse>, ServerError> {
    let closed = lock(&state.ledger).close_party(&payload.party)?;
    Ok(Json(CloseResponse { closed }))
}
