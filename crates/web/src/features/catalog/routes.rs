use axum::{Router, routing::get};

use super::handlers::{get_catalog, list_weight_classes};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_catalog))
        .route("/weight-classes", get(list_weight_classes))
}
