//! Funding-request generation.

use std::collections::HashMap;

use api_types::documents::FundingRequestNew;
use axum::{
    Json,
    extract::State,
    http::header,
    response::IntoResponse,
};
use ledger::MoneyCents;
use ledger::document::render_template;

use crate::server::ServerState;
use crate::ServerError;

/// Fills the configured template and streams it back as a download.
/// Template failures are recoverable: the client keeps the entered
/// fields and can retry once the template is fixed.
pub async fn funding_request(
    State(state): State<ServerState>,
    Json(payload): Json<FundingRequestNew>,
) -> Result<impl IntoResponse, ServerError> {
    let total: MoneyCents = payload.total_cost.parse()?;

    let fields = HashMap::from([
        ("projekt_name".to_string(), payload.project_name),
        ("datum".to_string(), payload.period),
        ("gesamtkosten".to_string(), total.to_decimal_string()),
        ("antragsteller".to_string(), payload.applicant),
    ]);

    let bytes = render_template(&state.template_path, &fields)?;
    Ok((
        [
            (header::CONTENT_TYPE, "application/octet-stream"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"foerderantrag.txt\"",
            ),
        ],
        bytes,
    ))
}
