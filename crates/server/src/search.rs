//! Keyword search for the per-project view.

use api_types::search::{SearchQuery, SearchResponse};
use axum::{
    Json,
    extract::{Query, State},
};

use crate::server::{ServerState, lock};
use crate::views::map_record;
use crate::ServerError;

pub async fn get(
    State(state): State<ServerState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<SearchResponse>, ServerError> {
    let (matches, net_total) = lock(&state.ledger).search(&query.term)?;
    Ok(Json(SearchResponse {
        matches: matches
            .iter()
            .map(|(position, record)| map_record(*position, record))
            .collect(),
        net_total_cents: net_total.cents(),
    }))
}
