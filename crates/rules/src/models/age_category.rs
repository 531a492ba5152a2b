use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::normalize_token;
use crate::error::RulesError;

/// Competition age brackets, youngest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AgeCategory {
    MightyMite,
    TinyTot,
    WeeOne,
    LittleOne,
    PreTeen,
    Juvenile,
    Adult,
    #[serde(rename = "MASTER_1")]
    Master1,
    #[serde(rename = "MASTER_2")]
    Master2,
    #[serde(rename = "MASTER_3")]
    Master3,
    #[serde(rename = "MASTER_4")]
    Master4,
    #[serde(rename = "MASTER_5")]
    Master5,
    #[serde(rename = "MASTER_6")]
    Master6,
    #[serde(rename = "MASTER_7")]
    Master7,
}

impl AgeCategory {
    pub fn all() -> &'static [AgeCategory] {
        use AgeCategory::*;
        &[
            MightyMite, TinyTot, WeeOne, LittleOne, PreTeen, Juvenile, Adult, Master1, Master2,
            Master3, Master4, Master5, Master6, Master7,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MightyMite => "MIGHTY_MITE",
            Self::TinyTot => "TINY_TOT",
            Self::WeeOne => "WEE_ONE",
            Self::LittleOne => "LITTLE_ONE",
            Self::PreTeen => "PRE_TEEN",
            Self::Juvenile => "JUVENILE",
            Self::Adult => "ADULT",
            Self::Master1 => "MASTER_1",
            Self::Master2 => "MASTER_2",
            Self::Master3 => "MASTER_3",
            Self::Master4 => "MASTER_4",
            Self::Master5 => "MASTER_5",
            Self::Master6 => "MASTER_6",
            Self::Master7 => "MASTER_7",
        }
    }

    /// Short name without the age range, e.g. "Master 1".
    pub fn name(&self) -> &'static str {
        match self {
            Self::MightyMite => "Mighty Mite",
            Self::TinyTot => "Tiny Tot",
            Self::WeeOne => "Wee One",
            Self::LittleOne => "Little One",
            Self::PreTeen => "Pre-Teen",
            Self::Juvenile => "Juvenile",
            Self::Adult => "Adult",
            Self::Master1 => "Master 1",
            Self::Master2 => "Master 2",
            Self::Master3 => "Master 3",
            Self::Master4 => "Master 4",
            Self::Master5 => "Master 5",
            Self::Master6 => "Master 6",
            Self::Master7 => "Master 7",
        }
    }

    pub fn label(&self) -> String {
        match self {
            Self::Master7 => format!("{} ({}+ years)", self.name(), self.min_age()),
            _ => format!("{} ({}-{} years)", self.name(), self.min_age(), self.max_age()),
        }
    }

    pub fn min_age(&self) -> u32 {
        self.range().0
    }

    /// Master 7 is open-ended; 100 stands in for "no upper bound".
    pub fn max_age(&self) -> u32 {
        self.range().1
    }

    pub fn match_duration_minutes(&self) -> u32 {
        self.range().2
    }

    fn range(&self) -> (u32, u32, u32) {
        match self {
            Self::MightyMite => (4, 5, 3),
            Self::TinyTot => (6, 7, 3),
            Self::WeeOne => (8, 9, 4),
            Self::LittleOne => (10, 12, 4),
            Self::PreTeen => (13, 15, 5),
            Self::Juvenile => (16, 17, 5),
            Self::Adult => (18, 29, 5),
            Self::Master1 => (30, 35, 5),
            Self::Master2 => (36, 40, 5),
            Self::Master3 => (41, 45, 5),
            Self::Master4 => (46, 50, 5),
            Self::Master5 => (51, 55, 5),
            Self::Master6 => (56, 60, 4),
            Self::Master7 => (61, 100, 4),
        }
    }

    pub fn contains(&self, age: u32) -> bool {
        (self.min_age()..=self.max_age()).contains(&age)
    }

    pub fn for_age(age: u32) -> Option<AgeCategory> {
        Self::all().iter().copied().find(|category| category.contains(age))
    }
}

impl std::str::FromStr for AgeCategory {
    type Err = RulesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = normalize_token(s);
        Self::all()
            .iter()
            .copied()
            .find(|category| category.as_str() == normalized)
            .ok_or_else(|| RulesError::unknown("age category", s))
    }
}

impl std::fmt::Display for AgeCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
