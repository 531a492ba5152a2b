use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{MatchStatus, SubmissionType};

/// One of the two competitors in a match or pairing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum Side {
    Athlete1,
    Athlete2,
}

impl Side {
    pub fn other(&self) -> Side {
        match self {
            Self::Athlete1 => Self::Athlete2,
            Self::Athlete2 => Self::Athlete1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AthleteRef {
    pub id: i64,
    pub name: String,
    pub team: Option<String>,
}

/// A match as returned by the tournament API.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct Match {
    pub id: i64,
    pub division_id: Option<i64>,
    pub athlete1_id: Option<i64>,
    pub athlete1_name: Option<String>,
    pub athlete1_team: Option<String>,
    pub athlete2_id: Option<i64>,
    pub athlete2_name: Option<String>,
    pub athlete2_team: Option<String>,
    pub athlete1_points: u32,
    pub athlete2_points: u32,
    pub athlete1_advantages: u32,
    pub athlete2_advantages: u32,
    pub athlete1_penalties: u32,
    pub athlete2_penalties: u32,
    pub status: MatchStatus,
    pub round_number: Option<u32>,
    pub match_number: Option<u32>,
    pub mat_number: Option<u32>,
    pub winner_id: Option<i64>,
    pub submission_type: Option<SubmissionType>,
    pub start_time: Option<DateTime<Utc>>,
}

impl Match {
    pub fn athlete(&self, side: Side) -> Option<AthleteRef> {
        let (id, name, team) = match side {
            Side::Athlete1 => (self.athlete1_id, &self.athlete1_name, &self.athlete1_team),
            Side::Athlete2 => (self.athlete2_id, &self.athlete2_name, &self.athlete2_team),
        };

        id.map(|id| AthleteRef {
            id,
            name: name.clone().unwrap_or_default(),
            team: team.clone(),
        })
    }

    /// Round the match belongs to; unset or zero rounds count as the first round.
    pub fn round(&self) -> u32 {
        self.round_number.filter(|round| *round > 0).unwrap_or(1)
    }

    pub fn winner_side(&self) -> Option<Side> {
        let winner = self.winner_id?;
        if self.athlete1_id == Some(winner) {
            Some(Side::Athlete1)
        } else if self.athlete2_id == Some(winner) {
            Some(Side::Athlete2)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_sparse_match() {
        let json = r#"{
            "id": 3,
            "athlete1Id": 10,
            "athlete1Name": "John Silva",
            "athlete2Id": 11,
            "athlete2Name": "Maria Santos",
            "status": "IN_PROGRESS",
            "roundNumber": 2,
            "winnerId": 11
        }"#;
        let m: Match = serde_json::from_str(json).unwrap();

        assert_eq!(m.status, MatchStatus::InProgress);
        assert_eq!(m.round(), 2);
        assert_eq!(m.athlete1_points, 0);
        assert_eq!(m.winner_side(), Some(Side::Athlete2));
        assert_eq!(m.athlete(Side::Athlete1).unwrap().name, "John Silva");
    }

    #[test]
    fn test_round_defaults_to_first() {
        let mut m = Match::default();
        assert_eq!(m.round(), 1);
        m.round_number = Some(0);
        assert_eq!(m.round(), 1);
    }
}
