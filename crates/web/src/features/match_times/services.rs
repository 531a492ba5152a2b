use rules::{MatchTimeTable, dto::division::DivisionDescriptor, dto::match_time::MatchTimeResponse};

use crate::error::{WebError, WebResult};

/// An empty body or `null` means no division is known yet.
pub fn parse_descriptor(body: &[u8]) -> WebResult<Option<DivisionDescriptor>> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }

    serde_json::from_slice::<Option<DivisionDescriptor>>(body)
        .map_err(|e| WebError::BadRequest(format!("Invalid division: {}", e)))
}

pub fn resolve(table: &MatchTimeTable, division: Option<&DivisionDescriptor>) -> MatchTimeResponse {
    table.resolve(division).into()
}
