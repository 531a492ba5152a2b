use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::RulesError;

/// Finishing techniques recorded when a match ends by submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum SubmissionType {
    Armbar,
    Triangle,
    #[serde(rename = "Rear Naked Choke")]
    RearNakedChoke,
    Kimura,
    Guillotine,
    Americana,
    Omoplata,
    #[serde(rename = "Ezekiel Choke")]
    EzekielChoke,
    #[serde(rename = "Bow and Arrow")]
    BowAndArrow,
    #[serde(rename = "Ankle Lock")]
    AnkleLock,
    #[serde(rename = "Heel Hook")]
    HeelHook,
    #[serde(rename = "Toe Hold")]
    ToeHold,
    Kneebar,
    Other,
}

impl SubmissionType {
    pub fn all() -> &'static [SubmissionType] {
        use SubmissionType::*;
        &[
            Armbar,
            Triangle,
            RearNakedChoke,
            Kimura,
            Guillotine,
            Americana,
            Omoplata,
            EzekielChoke,
            BowAndArrow,
            AnkleLock,
            HeelHook,
            ToeHold,
            Kneebar,
            Other,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Armbar => "Armbar",
            Self::Triangle => "Triangle",
            Self::RearNakedChoke => "Rear Naked Choke",
            Self::Kimura => "Kimura",
            Self::Guillotine => "Guillotine",
            Self::Americana => "Americana",
            Self::Omoplata => "Omoplata",
            Self::EzekielChoke => "Ezekiel Choke",
            Self::BowAndArrow => "Bow and Arrow",
            Self::AnkleLock => "Ankle Lock",
            Self::HeelHook => "Heel Hook",
            Self::ToeHold => "Toe Hold",
            Self::Kneebar => "Kneebar",
            Self::Other => "Other",
        }
    }
}

impl std::str::FromStr for SubmissionType {
    type Err = RulesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::all()
            .iter()
            .copied()
            .find(|submission| submission.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| RulesError::unknown("submission type", s))
    }
}
