use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::TournamentStatus;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Tournament {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub location: String,
    pub tournament_date: NaiveDate,
    pub registration_deadline: Option<NaiveDate>,
    pub organizer: Option<String>,
    pub contact_email: Option<String>,
    #[serde(default)]
    pub status: TournamentStatus,
}
