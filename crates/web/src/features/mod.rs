use axum::Router;

use crate::state::AppState;

pub mod age;
pub mod athletes;
pub mod brackets;
pub mod catalog;
pub mod divisions;
pub mod match_times;
pub mod pairings;

pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/catalog", catalog::routes::routes())
        .nest("/age", age::routes::routes())
        .nest("/match-times", match_times::routes::routes())
        .nest("/pairings", pairings::routes::routes())
        .nest("/brackets", brackets::routes::routes())
        .nest("/divisions", divisions::routes::routes())
        .nest("/athletes", athletes::routes::routes())
}
