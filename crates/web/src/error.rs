use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rules::RulesError;
use serde_json::json;
use std::fmt;
use validator::ValidationErrors;

/// Web layer errors
#[derive(Debug)]
pub enum WebError {
    Rules(RulesError),
    Validation(ValidationErrors),
    BadRequest(String),
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rules(e) => write!(f, "Rules error: {}", e),
            Self::Validation(e) => write!(f, "Validation error: {}", e),
            Self::BadRequest(msg) => write!(f, "Bad request: {}", msg),
        }
    }
}

fn validation_details(errors: &ValidationErrors) -> Vec<String> {
    let mut details: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |e| {
                let message = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string());
                if *field == "__all__" {
                    message
                } else {
                    format!("{}: {}", field, message)
                }
            })
        })
        .collect();
    details.sort();
    details
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let body = match &self {
            Self::Rules(RulesError::InvalidPairings(errors)) => {
                json!({
                    "error": "Invalid pairings",
                    "details": errors
                })
            }
            Self::Rules(e) => {
                json!({
                    "error": e.to_string()
                })
            }
            Self::Validation(errors) => {
                json!({
                    "error": "Validation failed",
                    "details": validation_details(errors)
                })
            }
            Self::BadRequest(msg) => {
                json!({
                    "error": msg
                })
            }
        };

        tracing::debug!("Rejected request: {}", self);

        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

impl From<RulesError> for WebError {
    fn from(error: RulesError) -> Self {
        Self::Rules(error)
    }
}

impl From<ValidationErrors> for WebError {
    fn from(error: ValidationErrors) -> Self {
        Self::Validation(error)
    }
}

pub type WebResult<T> = Result<T, WebError>;
