use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::normalize_token;
use crate::error::RulesError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BracketType {
    #[default]
    SingleElimination,
    DoubleElimination,
    RoundRobin,
}

impl BracketType {
    pub fn all() -> &'static [BracketType] {
        &[
            Self::SingleElimination,
            Self::DoubleElimination,
            Self::RoundRobin,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SingleElimination => "SINGLE_ELIMINATION",
            Self::DoubleElimination => "DOUBLE_ELIMINATION",
            Self::RoundRobin => "ROUND_ROBIN",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::SingleElimination => "Single Elimination",
            Self::DoubleElimination => "Double Elimination",
            Self::RoundRobin => "Round Robin",
        }
    }
}

impl std::str::FromStr for BracketType {
    type Err = RulesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = normalize_token(s);
        Self::all()
            .iter()
            .copied()
            .find(|bracket| bracket.as_str() == normalized)
            .ok_or_else(|| RulesError::unknown("bracket type", s))
    }
}
