use serde::Serialize;
use utoipa::ToSchema;

use super::{
    AgeCategory, BeltRank, BracketType, Gender, MatchStatus, PointType, SubmissionType,
    TournamentStatus, WeightClass, WeightClassEntry,
};

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BeltEntry {
    pub value: BeltRank,
    pub label: String,
    pub color: String,
    pub is_kids_belt: bool,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AgeCategoryEntry {
    pub value: AgeCategory,
    pub label: String,
    pub min_age: u32,
    pub max_age: u32,
    pub match_duration: u32,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LabelledValue {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct StatusEntry {
    pub value: String,
    pub label: String,
    pub color: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PointEntry {
    pub value: PointType,
    pub label: String,
    pub points: u32,
}

/// Every reference table in one serializable snapshot.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    pub belt_ranks: Vec<BeltEntry>,
    pub age_categories: Vec<AgeCategoryEntry>,
    pub genders: Vec<LabelledValue>,
    pub weight_classes_adult_male: Vec<WeightClassEntry>,
    pub weight_classes_adult_female: Vec<WeightClassEntry>,
    pub bracket_types: Vec<LabelledValue>,
    pub submission_types: Vec<String>,
    pub point_values: Vec<PointEntry>,
    pub match_statuses: Vec<StatusEntry>,
    pub tournament_statuses: Vec<StatusEntry>,
}

impl Catalog {
    pub fn standard() -> Self {
        Self {
            belt_ranks: BeltRank::all()
                .iter()
                .map(|belt| BeltEntry {
                    value: *belt,
                    label: belt.label().to_string(),
                    color: belt.color().to_string(),
                    is_kids_belt: belt.is_kids_belt(),
                })
                .collect(),
            age_categories: AgeCategory::all()
                .iter()
                .map(|category| AgeCategoryEntry {
                    value: *category,
                    label: category.label(),
                    min_age: category.min_age(),
                    max_age: category.max_age(),
                    match_duration: category.match_duration_minutes(),
                })
                .collect(),
            genders: Gender::all()
                .iter()
                .map(|gender| LabelledValue {
                    value: gender.as_str().to_string(),
                    label: gender.label().to_string(),
                })
                .collect(),
            weight_classes_adult_male: WeightClass::entries(Gender::Male),
            weight_classes_adult_female: WeightClass::entries(Gender::Female),
            bracket_types: BracketType::all()
                .iter()
                .map(|bracket| LabelledValue {
                    value: bracket.as_str().to_string(),
                    label: bracket.label().to_string(),
                })
                .collect(),
            submission_types: SubmissionType::all()
                .iter()
                .map(|submission| submission.label().to_string())
                .collect(),
            point_values: PointType::all()
                .iter()
                .map(|point| PointEntry {
                    value: *point,
                    label: point.label().to_string(),
                    points: point.points(),
                })
                .collect(),
            match_statuses: MatchStatus::all()
                .iter()
                .map(|status| StatusEntry {
                    value: status.as_str().to_string(),
                    label: status.label().to_string(),
                    color: status.color().to_string(),
                })
                .collect(),
            tournament_statuses: TournamentStatus::all()
                .iter()
                .map(|status| StatusEntry {
                    value: status.as_str().to_string(),
                    label: status.label().to_string(),
                    color: status.color().to_string(),
                })
                .collect(),
        }
    }
}
