//! Cockpit endpoints: headline figures and the journal.

use api_types::journal::JournalResponse;
use api_types::summary::{OpenItemsView, SummaryResponse};
use axum::{Json, extract::State};
use ledger::{OpenItems, Summary};

use crate::server::{ServerState, lock};
use crate::views::map_record;
use crate::ServerError;

fn map_open_items(items: OpenItems) -> OpenItemsView {
    OpenItemsView {
        count: items.count,
        total_cents: items.total.cents(),
    }
}

fn map_summary(summary: Summary) -> SummaryResponse {
    SummaryResponse {
        available_budget_cents: summary.available_budget.cents(),
        real_balance_cents: summary.real_balance.cents(),
        open_expenses: map_open_items(summary.open_expenses),
        open_any: map_open_items(summary.open_any),
    }
}

pub async fn get(State(state): State<ServerState>) -> Result<Json<SummaryResponse>, ServerError> {
    let summary = lock(&state.ledger).summary()?;
    Ok(Json(map_summary(summary)))
}

/// The full journal, most-recent-first. The ledger returns ingestion
/// order; the re-sort by descending position is presentation only.
pub async fn journal(
    State(state): State<ServerState>,
) -> Result<Json<JournalResponse>, ServerError> {
    let set = lock(&state.ledger).journal()?;
    let mut records: Vec<_> = set
        .records
        .iter()
        .enumerate()
        .map(|(position, record)| map_record(position, record))
        .collect();
    records.reverse();
    Ok(Json(JournalResponse { records }))
}
