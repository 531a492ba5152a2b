use axum::{
    Json,
    response::{IntoResponse, Response},
};
use chrono::Local;
use rules::dto::athlete::{AthleteSummary, CreateAthleteRequest};
use validator::Validate;

use crate::error::WebError;

#[utoipa::path(
    post,
    path = "/api/athletes/validate",
    request_body = CreateAthleteRequest,
    responses(
        (status = 200, description = "Athlete is valid; derived age and weight class", body = AthleteSummary),
        (status = 400, description = "Validation error")
    ),
    tag = "athletes"
)]
pub async fn validate_athlete(Json(req): Json<CreateAthleteRequest>) -> Result<Response, WebError> {
    req.validate()?;

    let summary = AthleteSummary::new(&req, Local::now().date_naive());

    Ok(Json(summary).into_response())
}
