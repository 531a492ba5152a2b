use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::services::clock::format_clock;
use crate::services::match_duration::MatchDuration;

/// A resolved match duration in the shapes the operator screens show it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MatchTimeResponse {
    pub seconds: u32,
    pub minutes: f64,
    /// "m:ss"
    pub clock: String,
    pub source: String,
    /// True when no rule matched and the default applied.
    pub is_default: bool,
}

impl From<MatchDuration> for MatchTimeResponse {
    fn from(duration: MatchDuration) -> Self {
        Self {
            seconds: duration.seconds,
            minutes: f64::from(duration.seconds) / 60.0,
            clock: format_clock(duration.seconds),
            source: duration.source.describe(),
            is_default: duration.source.is_default(),
        }
    }
}
