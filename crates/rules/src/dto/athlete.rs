use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::models::{BeltRank, Gender, WeightClass};
use crate::services::age;

/// Request payload for registering or updating an athlete
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAthleteRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Name must be between 1 and 255 characters"
    ))]
    pub name: String,

    #[validate(custom(function = "validate_birth_date"))]
    pub date_of_birth: NaiveDate,

    pub gender: Gender,

    pub belt_rank: BeltRank,

    #[validate(custom(function = "validate_weight"))]
    #[schema(value_type = f64)]
    pub weight: Decimal,

    #[validate(length(max = 255))]
    pub team: Option<String>,

    #[validate(length(max = 255))]
    pub coach_name: Option<String>,

    #[validate(email(message = "Email must be a valid address"))]
    pub email: Option<String>,

    #[validate(length(max = 32))]
    pub phone: Option<String>,

    #[validate(length(max = 500, message = "Experience notes are limited to 500 characters"))]
    pub experience_notes: Option<String>,
}

impl CreateAthleteRequest {
    pub fn age_on(&self, today: NaiveDate) -> Option<u32> {
        age::age_on(Some(self.date_of_birth), today)
    }

    pub fn weight_class(&self) -> Option<WeightClass> {
        WeightClass::classify(self.gender, self.weight)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AthleteSummary {
    pub age: Option<u32>,
    pub age_display: String,
    pub weight_class: Option<WeightClass>,
}

impl AthleteSummary {
    pub fn new(request: &CreateAthleteRequest, today: NaiveDate) -> Self {
        let age = request.age_on(today);
        Self {
            age,
            age_display: age::display_age(age),
            weight_class: request.weight_class(),
        }
    }
}

fn validate_birth_date(date_of_birth: &NaiveDate) -> Result<(), ValidationError> {
    if *date_of_birth > Local::now().date_naive() {
        let mut error = ValidationError::new("birth_date_in_future");
        error.message = Some("Date of birth cannot be in the future".into());
        return Err(error);
    }
    Ok(())
}

fn validate_weight(weight: &Decimal) -> Result<(), ValidationError> {
    if *weight <= Decimal::ZERO {
        let mut error = ValidationError::new("weight_not_positive");
        error.message = Some("Weight must be greater than zero".into());
        return Err(error);
    }
    Ok(())
}
