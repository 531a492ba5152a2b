use std::sync::Arc;

use rules::MatchTimeTable;

/// Shared, read-only state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub match_times: Arc<MatchTimeTable>,
}

impl AppState {
    pub fn new(match_times: MatchTimeTable) -> Self {
        Self {
            match_times: Arc::new(match_times),
        }
    }

    pub fn standard() -> Self {
        Self::new(MatchTimeTable::standard().clone())
    }
}
