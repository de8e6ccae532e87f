//! The sequential review workflow over HTTP.

use api_types::audit::{
    AuditPhase, AuditStateResponse, Verdict as ApiVerdict, VerdictRequest,
};
use axum::{
    Json,
    extract::State,
    http::header,
    response::IntoResponse,
};
use ledger::{AuditState, AuditVerdict, TransactionRecord};

use crate::server::{ServerState, lock};
use crate::views::map_record;
use crate::ServerError;

fn map_verdict(verdict: ApiVerdict) -> AuditVerdict {
    match verdict {
        ApiVerdict::Ok => AuditVerdict::Ok,
        ApiVerdict::Error => AuditVerdict::Error,
        ApiVerdict::Skip => AuditVerdict::Skip,
    }
}

fn map_state(
    state: AuditState,
    current: Option<TransactionRecord>,
) -> AuditStateResponse {
    match state {
        AuditState::Reviewing {
            index,
            remaining,
            deferred,
        } => AuditStateResponse {
            phase: AuditPhase::Reviewing,
            current: current.map(|record| map_record(index, &record)),
            remaining,
            deferred,
        },
        AuditState::Complete => AuditStateResponse {
            phase: AuditPhase::Complete,
            current: None,
            remaining: 0,
            deferred: 0,
        },
    }
}

pub async fn state(
    State(state): State<ServerState>,
) -> Result<Json<AuditStateResponse>, ServerError> {
    let mut cursor = lock(&state.audit);
    let (audit_state, current) = lock(&state.ledger).audit_state(&mut cursor)?;
    Ok(Json(map_state(audit_state, current)))
}

pub async fn verdict(
    State(state): State<ServerState>,
    Json(payload): Json<VerdictRequest>,
) -> Result<Json<AuditStateResponse>, ServerError> {
    let mut cursor = lock(&state.audit);
    let (audit_state, current) = lock(&state.ledger).audit_verdict(
        &mut cursor,
        map_verdict(payload.verdict),
        &payload.note,
    )?;
    Ok(Json(map_state(audit_state, current)))
}

/// Archive download offered at completion: the full set as CSV.
pub async fn export(State(state): State<ServerState>) -> Result<impl IntoResponse, ServerError> {
    let bytes = lock(&state.ledger).audit_archive()?;
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"kassenbuch_archiv.csv\"",
            ),
        ],
        bytes,
    ))
}
