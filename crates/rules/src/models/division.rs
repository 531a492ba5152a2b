use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{AgeCategory, BeltRank, BracketType, Gender, WeightClass};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Division {
    pub id: Option<i64>,
    pub tournament_id: Option<i64>,
    pub name: Option<String>,
    pub belt_rank: BeltRank,
    pub age_category: AgeCategory,
    pub gender: Gender,
    pub weight_class: Option<WeightClass>,
    #[serde(default)]
    pub bracket_type: BracketType,
    #[serde(default)]
    pub athlete_count: u32,
    #[serde(default)]
    pub matches_generated: bool,
}

impl Division {
    /// Name in the form "Adult Male Blue Belt Medium Heavy". Gender is left out for
    /// NOT_APPLICABLE divisions and the weight class when none is set.
    pub fn display_name(&self) -> String {
        display_name(
            self.age_category,
            self.gender,
            self.belt_rank,
            self.effective_weight_class(),
        )
    }

    /// Weight class, ignoring any value carried by a division where weight does not apply.
    pub fn effective_weight_class(&self) -> Option<WeightClass> {
        self.weight_class
            .filter(|class| class.is_available_for(self.gender))
    }
}

pub fn display_name(
    age_category: AgeCategory,
    gender: Gender,
    belt_rank: BeltRank,
    weight_class: Option<WeightClass>,
) -> String {
    let mut parts = vec![age_category.name().to_string()];
    if gender.has_weight_classes() {
        parts.push(gender.label().to_string());
    }
    parts.push(format!("{} Belt", belt_rank.label()));
    if let Some(class) = weight_class {
        parts.push(class.label().to_string());
    }
    parts.join(" ")
}
