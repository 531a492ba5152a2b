use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Side;
use crate::services::pairing::{MatchPair, PairingReport, RosterEntry};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ValidatePairingsRequest {
    pub pairs: Vec<MatchPair>,
    pub roster: Vec<RosterEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CandidatesRequest {
    pub pairs: Vec<MatchPair>,
    pub roster: Vec<RosterEntry>,
    pub pair_index: usize,
    pub slot: Side,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PairingValidationResponse {
    pub valid: bool,
    pub errors: Vec<String>,
}

impl From<PairingReport> for PairingValidationResponse {
    fn from(report: PairingReport) -> Self {
        Self {
            valid: report.is_valid(),
            errors: report.messages(),
        }
    }
}
