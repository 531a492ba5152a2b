use axum::{Router, routing::post};

use super::handlers::validate_athlete;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/validate", post(validate_athlete))
}
