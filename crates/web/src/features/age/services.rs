use chrono::{Local, NaiveDate};
use rules::services::age;

use crate::error::{WebError, WebResult};

/// Reference date for an age query; today's local date unless one is supplied.
pub fn reference_date(today: Option<&str>) -> WebResult<NaiveDate> {
    match today.map(str::trim).filter(|raw| !raw.is_empty()) {
        Some(raw) => age::parse_birth_date(raw)
            .ok_or_else(|| WebError::BadRequest(format!("Invalid date: '{}'", raw))),
        None => Ok(Local::now().date_naive()),
    }
}

/// Unparseable birth dates resolve to an unknown age rather than an error.
pub fn age_for(date_of_birth: Option<&str>, today: NaiveDate) -> Option<u32> {
    age::age_on(date_of_birth.and_then(age::parse_birth_date), today)
}
