use axum::{Router, routing::post};

use super::handlers::{list_candidates, validate_pairings};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/validate", post(validate_pairings))
        .route("/candidates", post(list_candidates))
}
