use axum::{
    Json,
    response::{IntoResponse, Response},
};
use rules::{
    dto::pairing::{CandidatesRequest, PairingValidationResponse, ValidatePairingsRequest},
    services::pairing::{self, RosterEntry},
};

use crate::error::WebError;

#[utoipa::path(
    post,
    path = "/api/pairings/validate",
    request_body = ValidatePairingsRequest,
    responses(
        (status = 200, description = "Every violation found in the batch, in pair order", body = PairingValidationResponse)
    ),
    tag = "pairings"
)]
pub async fn validate_pairings(
    Json(req): Json<ValidatePairingsRequest>,
) -> Result<Response, WebError> {
    let report = pairing::validate_pairs(&req.pairs, &req.roster);
    if !report.is_valid() {
        tracing::info!(
            violations = report.violations.len(),
            "Pairing batch rejected"
        );
    }

    Ok(Json(PairingValidationResponse::from(report)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/pairings/candidates",
    request_body = CandidatesRequest,
    responses(
        (status = 200, description = "Athletes still selectable for the slot", body = Vec<RosterEntry>)
    ),
    tag = "pairings"
)]
pub async fn list_candidates(Json(req): Json<CandidatesRequest>) -> Result<Response, WebError> {
    let candidates: Vec<RosterEntry> =
        pairing::available_candidates(&req.pairs, req.pair_index, req.slot, &req.roster)
            .into_iter()
            .cloned()
            .collect();

    Ok(Json(candidates).into_response())
}
