use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use super::match_time::MatchTimeResponse;
use crate::models::{AgeCategory, BeltRank, BracketType, Gender, WeightClass, display_name};
use crate::services::match_duration::MatchTimeTable;

/// Division as loosely described by upstream data. Every field is optional free text.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct DivisionDescriptor {
    pub name: Option<String>,
    pub belt_rank: Option<String>,
    pub age_category: Option<String>,
    pub gender: Option<String>,
    pub weight_class: Option<String>,
    pub bracket_type: Option<String>,
}

/// Request payload for creating a division within a tournament
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_weight_class"))]
pub struct CreateDivisionRequest {
    pub belt_rank: BeltRank,
    pub age_category: AgeCategory,
    pub gender: Gender,
    pub weight_class: Option<WeightClass>,
    #[serde(default)]
    pub bracket_type: BracketType,
}

impl CreateDivisionRequest {
    /// Drops a weight class that cannot apply to the selected gender.
    pub fn normalized(mut self) -> Self {
        if !self.gender.has_weight_classes() {
            self.weight_class = None;
        }
        self
    }

    pub fn display_name(&self) -> String {
        display_name(
            self.age_category,
            self.gender,
            self.belt_rank,
            self.weight_class
                .filter(|class| class.is_available_for(self.gender)),
        )
    }

    pub fn descriptor(&self) -> DivisionDescriptor {
        DivisionDescriptor {
            name: Some(self.display_name()),
            belt_rank: Some(self.belt_rank.as_str().to_string()),
            age_category: Some(self.age_category.as_str().to_string()),
            gender: Some(self.gender.as_str().to_string()),
            weight_class: self.weight_class.map(|class| class.as_str().to_string()),
            bracket_type: Some(self.bracket_type.as_str().to_string()),
        }
    }
}

/// What the operator sees once a division request passes validation.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DivisionSummary {
    pub display_name: String,
    pub match_duration: MatchTimeResponse,
}

impl DivisionSummary {
    pub fn new(request: &CreateDivisionRequest, table: &MatchTimeTable) -> Self {
        let descriptor = request.descriptor();
        Self {
            display_name: request.display_name(),
            match_duration: table.resolve(Some(&descriptor)).into(),
        }
    }
}

fn validate_weight_class(request: &CreateDivisionRequest) -> Result<(), ValidationError> {
    let Some(class) = request.weight_class else {
        return Ok(());
    };

    if !request.gender.has_weight_classes() {
        let mut error = ValidationError::new("weight_class_not_applicable");
        error.message = Some("Weight class does not apply when gender is NOT_APPLICABLE".into());
        return Err(error);
    }

    if !class.is_available_for(request.gender) {
        let mut error = ValidationError::new("weight_class_unavailable");
        error.message = Some(
            format!(
                "Weight class {} is not available for {}",
                class.label(),
                request.gender.label()
            )
            .into(),
        );
        return Err(error);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(gender: Gender, weight_class: Option<WeightClass>) -> CreateDivisionRequest {
        CreateDivisionRequest {
            belt_rank: BeltRank::Purple,
            age_category: AgeCategory::Master1,
            gender,
            weight_class,
            bracket_type: BracketType::DoubleElimination,
        }
    }

    #[test]
    fn test_valid_request() {
        assert!(request(Gender::Male, Some(WeightClass::UltraHeavy)).validate().is_ok());
        assert!(request(Gender::NotApplicable, None).validate().is_ok());
    }

    #[test]
    fn test_weight_class_rejected_without_gender() {
        let errors = request(Gender::NotApplicable, Some(WeightClass::Light))
            .validate()
            .unwrap_err();
        let schema_errors = errors.field_errors();
        let codes: Vec<&str> = schema_errors["__all__"]
            .iter()
            .map(|e| e.code.as_ref())
            .collect();
        assert_eq!(codes, vec!["weight_class_not_applicable"]);
    }

    #[test]
    fn test_weight_class_must_exist_for_gender() {
        assert!(request(Gender::Female, Some(WeightClass::UltraHeavy)).validate().is_err());
    }

    #[test]
    fn test_normalized_clears_weight_class() {
        let normalized = request(Gender::NotApplicable, Some(WeightClass::Light)).normalized();
        assert_eq!(normalized.weight_class, None);
        assert!(normalized.validate().is_ok());
    }

    #[test]
    fn test_bracket_type_defaults() {
        let json = r#"{"beltRank":"BLUE","ageCategory":"ADULT","gender":"MALE","weightClass":"FEATHER"}"#;
        let request: CreateDivisionRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.bracket_type, BracketType::SingleElimination);
        assert_eq!(request.display_name(), "Adult Male Blue Belt Feather");
    }

    #[test]
    fn test_summary_resolves_match_duration() {
        let summary = DivisionSummary::new(
            &request(Gender::Male, Some(WeightClass::Light)),
            MatchTimeTable::standard(),
        );
        assert_eq!(summary.display_name, "Master 1 Male Purple Belt Light");
        assert_eq!(summary.match_duration.seconds, 420);
        assert_eq!(summary.match_duration.clock, "7:00");
        assert!(!summary.match_duration.is_default);
    }

    #[test]
    fn test_kids_summary_uses_youth_time() {
        let kids = |age_category| CreateDivisionRequest {
            belt_rank: BeltRank::YellowBlack,
            age_category,
            gender: Gender::NotApplicable,
            weight_class: None,
            bracket_type: BracketType::SingleElimination,
        };
        let table = MatchTimeTable::standard();

        assert_eq!(DivisionSummary::new(&kids(AgeCategory::TinyTot), table).match_duration.seconds, 120);
        assert_eq!(DivisionSummary::new(&kids(AgeCategory::WeeOne), table).match_duration.seconds, 180);
        assert_eq!(DivisionSummary::new(&kids(AgeCategory::LittleOne), table).match_duration.seconds, 180);
    }
}
