use thiserror::Error;

#[derive(Debug, Error)]
pub enum RulesError {
    #[error("Unknown {kind}: '{value}'")]
    UnknownValue { kind: &'static str, value: String },

    #[error("Invalid match time table: {0}")]
    InvalidMatchTime(String),

    #[error("Invalid pairings: {}", .0.join("; "))]
    InvalidPairings(Vec<String>),
}

pub type Result<T> = std::result::Result<T, RulesError>;

impl RulesError {
    pub fn unknown(kind: &'static str, value: impl Into<String>) -> Self {
        Self::UnknownValue {
            kind,
            value: value.into(),
        }
    }
}
