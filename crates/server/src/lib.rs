use axum::{Json, http::StatusCode, response::IntoResponse};
use ledger::LedgerError;

use serde::Serialize;
pub use server::{ServerConfig, run_with_listener, spawn_with_listener};

mod audit;
mod documents;
mod entries;
mod payables;
mod search;
mod server;
mod summary;
mod views;

pub enum ServerError {
    Ledger(LedgerError),
    Generic(String),
}

#[derive(Serialize)]
struct Error {
    error: String,
}

fn status_for_ledger_error(err: &LedgerError) -> StatusCode {
    match err {
        LedgerError::NotFound(_) | LedgerError::TemplateNotFound(_) => StatusCode::NOT_FOUND,
        LedgerError::AuditDisabled => StatusCode::CONFLICT,
        LedgerError::Load(_) | LedgerError::Write(_) => StatusCode::BAD_GATEWAY,
        LedgerError::Validation(_) | LedgerError::TemplateRender(_) => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
    }
}

fn message_for_ledger_error(err: LedgerError) -> String {
    match &err {
        LedgerError::Load(detail) | LedgerError::Write(detail) => {
            tracing::error!("table store error: {detail}");
        }
        _ => {}
    }
    err.to_string()
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            ServerError::Ledger(err) => {
                (status_for_ledger_error(&err), message_for_ledger_error(err))
            }
            ServerError::Generic(err) => (StatusCode::BAD_REQUEST, err),
        };

        (status, Json(Error { error })).into_response()
    }
}

impl From<LedgerError> for ServerError {
    fn from(value: LedgerError) -> Self {
        Self::Ledger(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_422() {
        let res = ServerError::from(LedgerError::Validation("x".to_string())).into_response();
        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn not_found_maps_to_404() {
        let res = ServerError::from(LedgerError::NotFound("x".to_string())).into_response();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn missing_template_maps_to_404() {
        let res =
            ServerError::from(LedgerError::TemplateNotFound("x".to_string())).into_response();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn store_failures_map_to_502() {
        let res = ServerError::from(LedgerError::Load("down".to_string())).into_response();
        assert_eq!(res.status(), StatusCode::BAD_GATEWAY);
        let res = ServerError::from(LedgerError::Write("down".to_string())).into_response();
        assert_eq!(res.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn disabled_audit_maps_to_409() {
        let res = ServerError::from(LedgerError::AuditDisabled).into_response();
        assert_eq!(res.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn generic_maps_to_400() {
        let res = ServerError::Generic("bad".to_string()).into_response();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }
}
