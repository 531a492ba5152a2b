//! Whole-year age from a birth date.
//!
//! All ages in the workspace are computed here. "Today" is the local calendar date of the
//! machine running the code; callers that need a fixed reference date use [`age_on`].

use chrono::{DateTime, Datelike, Local, NaiveDate};
use serde::{Deserialize, Deserializer};

/// Shown wherever an age cannot be derived.
pub const UNKNOWN_AGE: &str = "N/A";

/// Completed years between `birth` and `today`.
///
/// Returns `None` when the birth date is missing or lies after `today`.
pub fn age_on(birth: Option<NaiveDate>, today: NaiveDate) -> Option<u32> {
    let birth = birth?;
    if birth > today {
        return None;
    }

    let mut age = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }

    u32::try_from(age).ok()
}

pub fn age_today(birth: Option<NaiveDate>) -> Option<u32> {
    age_on(birth, Local::now().date_naive())
}

/// Parses `YYYY-MM-DD` or the date part of an RFC 3339 timestamp.
pub fn parse_birth_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|timestamp| timestamp.date_naive())
        })
        .or_else(|| {
            raw.get(..10)
                .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
        })
}

pub fn display_age(age: Option<u32>) -> String {
    age.map(|years| years.to_string())
        .unwrap_or_else(|| UNKNOWN_AGE.to_string())
}

/// Serde helper for birth dates that may arrive as `null`, `""`, a date or a timestamp.
pub fn deserialize_birth_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_birth_date))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_birthday_already_passed() {
        assert_eq!(age_on(Some(date(2000, 3, 10)), date(2025, 6, 1)), Some(25));
    }

    #[test]
    fn test_birthday_today() {
        assert_eq!(age_on(Some(date(2000, 6, 1)), date(2025, 6, 1)), Some(25));
    }

    #[test]
    fn test_birthday_tomorrow() {
        assert_eq!(age_on(Some(date(2000, 6, 2)), date(2025, 6, 1)), Some(24));
    }

    #[test]
    fn test_birthday_later_month() {
        assert_eq!(age_on(Some(date(2000, 12, 1)), date(2025, 6, 30)), Some(24));
    }

    #[test]
    fn test_leap_day_birth() {
        assert_eq!(age_on(Some(date(2004, 2, 29)), date(2025, 2, 28)), Some(20));
        assert_eq!(age_on(Some(date(2004, 2, 29)), date(2025, 3, 1)), Some(21));
    }

    #[test]
    fn test_missing_birth_date_is_unknown() {
        assert_eq!(age_on(None, date(2025, 1, 1)), None);
        assert_eq!(display_age(None), "N/A");
    }

    #[test]
    fn test_future_birth_date_is_unknown() {
        assert_eq!(age_on(Some(date(2030, 1, 1)), date(2025, 1, 1)), None);
    }

    #[test]
    fn test_born_today_is_zero() {
        assert_eq!(age_on(Some(date(2025, 1, 1)), date(2025, 1, 1)), Some(0));
    }

    #[test]
    fn test_parse_birth_date_formats() {
        assert_eq!(parse_birth_date("2010-05-01"), Some(date(2010, 5, 1)));
        assert_eq!(
            parse_birth_date("2010-05-01T00:00:00Z"),
            Some(date(2010, 5, 1))
        );
        assert_eq!(
            parse_birth_date("2010-05-01T00:00:00.000"),
            Some(date(2010, 5, 1))
        );
        assert_eq!(parse_birth_date(""), None);
        assert_eq!(parse_birth_date("   "), None);
        assert_eq!(parse_birth_date("not a date"), None);
    }

    #[test]
    fn test_deserialize_birth_date() {
        #[derive(Deserialize)]
        struct Row {
            #[serde(default, deserialize_with = "deserialize_birth_date")]
            dob: Option<NaiveDate>,
        }

        let row: Row = serde_json::from_str(r#"{"dob": "1990-07-15"}"#).unwrap();
        assert_eq!(row.dob, Some(date(1990, 7, 15)));

        let row: Row = serde_json::from_str(r#"{"dob": null}"#).unwrap();
        assert_eq!(row.dob, None);

        let row: Row = serde_json::from_str(r#"{"dob": ""}"#).unwrap();
        assert_eq!(row.dob, None);

        let row: Row = serde_json::from_str("{}").unwrap();
        assert_eq!(row.dob, None);
    }
}
