//! Live score keeping for a single match.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;

use crate::models::{Match, PointType, Side};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SideScore {
    pub points: u32,
    pub advantages: u32,
    pub penalties: u32,
}

impl SideScore {
    fn ranking(&self, other: &SideScore) -> Ordering {
        self.points
            .cmp(&other.points)
            .then(self.advantages.cmp(&other.advantages))
            .then(other.penalties.cmp(&self.penalties))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreCard {
    athlete1: SideScore,
    athlete2: SideScore,
}

impl ScoreCard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Picks up whatever score the backend already recorded.
    pub fn from_match(m: &Match) -> Self {
        Self {
            athlete1: SideScore {
                points: m.athlete1_points,
                advantages: m.athlete1_advantages,
                penalties: m.athlete1_penalties,
            },
            athlete2: SideScore {
                points: m.athlete2_points,
                advantages: m.athlete2_advantages,
                penalties: m.athlete2_penalties,
            },
        }
    }

    pub fn side(&self, side: Side) -> &SideScore {
        match side {
            Side::Athlete1 => &self.athlete1,
            Side::Athlete2 => &self.athlete2,
        }
    }

    fn side_mut(&mut self, side: Side) -> &mut SideScore {
        match side {
            Side::Athlete1 => &mut self.athlete1,
            Side::Athlete2 => &mut self.athlete2,
        }
    }

    pub fn award(&mut self, side: Side, point: PointType) -> u32 {
        let score = self.side_mut(side);
        score.points += point.points();
        debug!(?side, point = point.as_str(), total = score.points, "Points awarded");
        score.points
    }

    pub fn advantage(&mut self, side: Side) -> u32 {
        let score = self.side_mut(side);
        score.advantages += 1;
        score.advantages
    }

    pub fn penalty(&mut self, side: Side) -> u32 {
        let score = self.side_mut(side);
        score.penalties += 1;
        score.penalties
    }

    /// Points first, then advantages, then the fewer penalties. `None` on a dead heat.
    pub fn leader(&self) -> Option<Side> {
        match self.athlete1.ranking(&self.athlete2) {
            Ordering::Greater => Some(Side::Athlete1),
            Ordering::Less => Some(Side::Athlete2),
            Ordering::Equal => None,
        }
    }

    pub fn to_update(&self) -> ScoreUpdate {
        ScoreUpdate {
            athlete1_points: self.athlete1.points,
            athlete2_points: self.athlete2.points,
            athlete1_advantages: self.athlete1.advantages,
            athlete2_advantages: self.athlete2.advantages,
            athlete1_penalties: self.athlete1.penalties,
            athlete2_penalties: self.athlete2.penalties,
        }
    }
}

/// Body of the match update call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScoreUpdate {
    pub athlete1_points: u32,
    pub athlete2_points: u32,
    pub athlete1_advantages: u32,
    pub athlete2_advantages: u32,
    pub athlete1_penalties: u32,
    pub athlete2_penalties: u32,
}
