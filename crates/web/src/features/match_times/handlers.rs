use axum::{
    Json,
    body::Bytes,
    extract::State,
    response::{IntoResponse, Response},
};
use rules::dto::{division::DivisionDescriptor, match_time::MatchTimeResponse};

use crate::{error::WebError, state::AppState};

use super::services;

#[utoipa::path(
    post,
    path = "/api/match-times",
    request_body(content = DivisionDescriptor, description = "Division to time; an empty body means none"),
    responses(
        (status = 200, description = "Regulation match duration for the division", body = MatchTimeResponse),
        (status = 400, description = "Malformed division")
    ),
    tag = "match-times"
)]
pub async fn resolve_match_time(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, WebError> {
    let division = services::parse_descriptor(&body)?;
    let response = services::resolve(&state.match_times, division.as_ref());

    Ok(Json(response).into_response())
}
