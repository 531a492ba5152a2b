mod age_category;
mod athlete;
mod belt;
mod bracket;
mod catalog;
mod division;
mod gender;
mod matches;
mod points;
mod status;
mod submission;
mod tournament;
mod weight_class;

pub use age_category::AgeCategory;
pub use athlete::Athlete;
pub use belt::{BeltRank, BeltTier};
pub use bracket::BracketType;
pub use catalog::{
    AgeCategoryEntry, BeltEntry, Catalog, LabelledValue, PointEntry, StatusEntry,
};
pub use division::{Division, display_name};
pub use gender::Gender;
pub use matches::{AthleteRef, Match, Side};
pub use points::PointType;
pub use status::{MatchStatus, TournamentStatus};
pub use submission::SubmissionType;
pub use tournament::Tournament;
pub use weight_class::{OPEN_ENDED_MAX_KG, WeightClass, WeightClassEntry};

/// Uppercases and maps spaces and dashes to underscores so that "green-black",
/// "Green Black" and "GREEN_BLACK" all name the same catalog value.
pub(crate) fn normalize_token(s: &str) -> String {
    s.trim()
        .chars()
        .map(|c| match c {
            ' ' | '-' => '_',
            c => c.to_ascii_uppercase(),
        })
        .collect()
}
