use axum::{Router, routing::post};

use super::handlers::organize_rounds;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/rounds", post(organize_rounds))
}
