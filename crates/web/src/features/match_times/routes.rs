use axum::{Router, routing::post};

use super::handlers::resolve_match_time;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/", post(resolve_match_time))
}
