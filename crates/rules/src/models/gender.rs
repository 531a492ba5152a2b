use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::normalize_token;
use crate::error::RulesError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Gender {
    Male,
    Female,
    /// Pre-teen divisions, where weight classes do not apply.
    NotApplicable,
}

impl Gender {
    pub fn all() -> &'static [Gender] {
        &[Self::Male, Self::Female, Self::NotApplicable]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "MALE",
            Self::Female => "FEMALE",
            Self::NotApplicable => "NOT_APPLICABLE",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::NotApplicable => "Not Applicable (Kids under 10)",
        }
    }

    pub fn has_weight_classes(&self) -> bool {
        !matches!(self, Self::NotApplicable)
    }
}

impl std::str::FromStr for Gender {
    type Err = RulesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_token(s).as_str() {
            "MALE" | "M" => Ok(Self::Male),
            "FEMALE" | "F" => Ok(Self::Female),
            "NOT_APPLICABLE" | "NA" | "N/A" => Ok(Self::NotApplicable),
            _ => Err(RulesError::unknown("gender", s)),
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
