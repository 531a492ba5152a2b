use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{BeltRank, Gender, WeightClass};
use crate::services::age;
use crate::services::pairing::RosterEntry;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Athlete {
    pub id: i64,
    pub name: String,
    #[serde(default, deserialize_with = "age::deserialize_birth_date")]
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Gender,
    pub belt_rank: BeltRank,
    #[schema(value_type = f64)]
    pub weight: Decimal,
    pub team: Option<String>,
    pub coach_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub experience_notes: Option<String>,
}

impl Athlete {
    pub fn age_on(&self, today: NaiveDate) -> Option<u32> {
        age::age_on(self.date_of_birth, today)
    }

    pub fn age(&self) -> Option<u32> {
        age::age_today(self.date_of_birth)
    }

    pub fn weight_class(&self) -> Option<WeightClass> {
        WeightClass::classify(self.gender, self.weight)
    }

    pub fn roster_entry(&self) -> RosterEntry {
        RosterEntry {
            id: self.id,
            name: self.name.clone(),
            weight: Some(self.weight),
            team: self.team.clone(),
        }
    }
}
