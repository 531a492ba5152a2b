use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::normalize_token;
use crate::error::RulesError;

/// Match lifecycle as reported by the tournament backend. Transitions are enforced there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
    Cancelled,
    Walkover,
}

impl MatchStatus {
    pub fn all() -> &'static [MatchStatus] {
        &[
            Self::Pending,
            Self::InProgress,
            Self::Completed,
            Self::Cancelled,
            Self::Walkover,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::InProgress => "IN_PROGRESS",
            Self::Completed => "COMPLETED",
            Self::Cancelled => "CANCELLED",
            Self::Walkover => "WALKOVER",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
            Self::Walkover => "Walkover",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Self::Pending => "#FFA500",
            Self::InProgress => "#4169E1",
            Self::Completed => "#32CD32",
            Self::Cancelled => "#DC143C",
            Self::Walkover => "#FFD700",
        }
    }

    pub fn is_finished(&self) -> bool {
        matches!(self, Self::Completed | Self::Walkover | Self::Cancelled)
    }
}

impl std::str::FromStr for MatchStatus {
    type Err = RulesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = normalize_token(s);
        Self::all()
            .iter()
            .copied()
            .find(|status| status.as_str() == normalized)
            .ok_or_else(|| RulesError::unknown("match status", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TournamentStatus {
    #[default]
    Draft,
    RegistrationOpen,
    RegistrationClosed,
    InProgress,
    Completed,
    Cancelled,
}

impl TournamentStatus {
    pub fn all() -> &'static [TournamentStatus] {
        &[
            Self::Draft,
            Self::RegistrationOpen,
            Self::RegistrationClosed,
            Self::InProgress,
            Self::Completed,
            Self::Cancelled,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "DRAFT",
            Self::RegistrationOpen => "REGISTRATION_OPEN",
            Self::RegistrationClosed => "REGISTRATION_CLOSED",
            Self::InProgress => "IN_PROGRESS",
            Self::Completed => "COMPLETED",
            Self::Cancelled => "CANCELLED",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::RegistrationOpen => "Registration Open",
            Self::RegistrationClosed => "Registration Closed",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Self::Draft => "#808080",
            Self::RegistrationOpen => "#32CD32",
            Self::RegistrationClosed => "#FFA500",
            Self::InProgress => "#4169E1",
            Self::Completed => "#800080",
            Self::Cancelled => "#DC143C",
        }
    }
}
