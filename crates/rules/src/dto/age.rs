use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::services::age::display_age;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AgeResponse {
    pub age: Option<u32>,
    pub display: String,
}

impl From<Option<u32>> for AgeResponse {
    fn from(age: Option<u32>) -> Self {
        Self {
            age,
            display: display_age(age),
        }
    }
}
