use axum::Json;
use rules::{
    models::Match,
    services::bracket::{self, Round},
};

#[utoipa::path(
    post,
    path = "/api/brackets/rounds",
    request_body = Vec<Match>,
    responses(
        (status = 200, description = "Matches grouped into named rounds", body = Vec<Round>)
    ),
    tag = "brackets"
)]
pub async fn organize_rounds(Json(matches): Json<Vec<Match>>) -> Json<Vec<Round>> {
    Json(bracket::organize_by_round(&matches))
}
