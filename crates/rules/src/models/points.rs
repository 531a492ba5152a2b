use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::normalize_token;
use crate::error::RulesError;

/// Scoring positions and the points each one awards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PointType {
    Takedown,
    Sweep,
    KneeOnBelly,
    GuardPass,
    Mount,
    BackControl,
}

impl PointType {
    pub fn all() -> &'static [PointType] {
        &[
            Self::Takedown,
            Self::Sweep,
            Self::KneeOnBelly,
            Self::GuardPass,
            Self::Mount,
            Self::BackControl,
        ]
    }

    pub fn points(&self) -> u32 {
        match self {
            Self::Takedown | Self::Sweep | Self::KneeOnBelly => 2,
            Self::GuardPass => 3,
            Self::Mount | Self::BackControl => 4,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Takedown => "TAKEDOWN",
            Self::Sweep => "SWEEP",
            Self::KneeOnBelly => "KNEE_ON_BELLY",
            Self::GuardPass => "GUARD_PASS",
            Self::Mount => "MOUNT",
            Self::BackControl => "BACK_CONTROL",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Takedown => "Takedown",
            Self::Sweep => "Sweep",
            Self::KneeOnBelly => "Knee-on-Belly",
            Self::GuardPass => "Guard Pass",
            Self::Mount => "Mount",
            Self::BackControl => "Back Control",
        }
    }
}

impl std::str::FromStr for PointType {
    type Err = RulesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = normalize_token(s);
        Self::all()
            .iter()
            .copied()
            .find(|point| point.as_str() == normalized)
            .ok_or_else(|| RulesError::unknown("point type", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_values() {
        assert_eq!(PointType::Takedown.points(), 2);
        assert_eq!(PointType::Sweep.points(), 2);
        assert_eq!(PointType::KneeOnBelly.points(), 2);
        assert_eq!(PointType::GuardPass.points(), 3);
        assert_eq!(PointType::Mount.points(), 4);
        assert_eq!(PointType::BackControl.points(), 4);
    }

    #[test]
    fn test_parse() {
        assert_eq!("knee-on-belly".parse::<PointType>().unwrap(), PointType::KneeOnBelly);
        assert!("advantage".parse::<PointType>().is_err());
    }
}
