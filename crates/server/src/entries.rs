//! The entry form endpoint.

use api_types::entries::{EntryCreated, EntryKind as ApiEntryKind, EntryNew};
use axum::{Json, extract::State, http::StatusCode};
use ledger::{Account, EntryKind, MoneyCents, NewEntry};

use crate::server::{ServerState, lock};
use crate::views::map_status_back;
use crate::ServerError;

fn map_kind(kind: ApiEntryKind) -> EntryKind {
    match kind {
        ApiEntryKind::Income => EntryKind::Income,
        ApiEntryKind::Expense => EntryKind::Expense,
    }
}

pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<EntryNew>,
) -> Result<(StatusCode, Json<EntryCreated>), ServerError> {
    let amount: MoneyCents = payload.amount.parse()?;
    let account = Account::parse_cell(payload.account.as_deref().unwrap_or("Bank"));

    let entry = NewEntry {
        date: payload.date,
        party: payload.party,
        kind: map_kind(payload.kind),
        amount,
        note: payload.note,
        account,
        has_invoice: payload.has_invoice,
        status: payload.status.map(map_status_back),
    };

    let position = lock(&state.ledger).add_entry(entry)?;
    Ok((StatusCode::CREATED, Json(EntryCreated { position })))
}
