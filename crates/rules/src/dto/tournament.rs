use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// Request payload for creating a new tournament
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_deadline"))]
pub struct CreateTournamentRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Name must be between 1 and 255 characters"
    ))]
    pub name: String,

    #[validate(length(max = 2000))]
    pub description: Option<String>,

    #[validate(length(min = 1, max = 255, message = "Location is required"))]
    pub location: String,

    pub tournament_date: NaiveDate,

    pub registration_deadline: NaiveDate,

    #[validate(length(min = 1, max = 255, message = "Organizer is required"))]
    pub organizer: String,

    #[validate(email(message = "Contact email must be a valid address"))]
    pub contact_email: String,
}

fn validate_deadline(request: &CreateTournamentRequest) -> Result<(), ValidationError> {
    if request.registration_deadline > request.tournament_date {
        let mut error = ValidationError::new("deadline_after_tournament");
        error.message = Some("Registration deadline must be on or before the tournament date".into());
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> CreateTournamentRequest {
        CreateTournamentRequest {
            name: "Summer BJJ Championship 2025".to_string(),
            description: None,
            location: "Lisbon".to_string(),
            tournament_date: NaiveDate::from_ymd_opt(2025, 7, 12).unwrap(),
            registration_deadline: NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
            organizer: "IBJJF".to_string(),
            contact_email: "events@example.com".to_string(),
        }
    }

    #[test]
    fn test_valid_request() {
        assert!(request().validate().is_ok());
    }

    #[test]
    fn test_deadline_on_tournament_day_is_allowed() {
        let mut req = request();
        req.registration_deadline = req.tournament_date;
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_deadline_after_tournament() {
        let mut req = request();
        req.registration_deadline = NaiveDate::from_ymd_opt(2025, 7, 13).unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_required_fields() {
        let mut req = request();
        req.location = String::new();
        req.organizer = String::new();
        let errors = req.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("location"));
        assert!(fields.contains_key("organizer"));
    }
}
