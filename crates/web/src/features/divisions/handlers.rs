use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use rules::dto::division::{CreateDivisionRequest, DivisionSummary};
use validator::Validate;

use crate::{error::WebError, state::AppState};

#[utoipa::path(
    post,
    path = "/api/divisions/validate",
    request_body = CreateDivisionRequest,
    responses(
        (status = 200, description = "Division is valid", body = DivisionSummary),
        (status = 400, description = "Validation error")
    ),
    tag = "divisions"
)]
pub async fn validate_division(
    State(state): State<AppState>,
    Json(req): Json<CreateDivisionRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    Ok(Json(DivisionSummary::new(&req, &state.match_times)).into_response())
}
