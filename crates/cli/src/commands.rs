use std::path::Path;

use chrono::{Local, NaiveDate};
use rules::{
    MatchTimeTable,
    dto::{division::DivisionDescriptor, match_time::MatchTimeResponse},
    models::{Athlete, Catalog, Match, Side},
    services::{
        age, bracket, enrollment,
        pairing::{self, MatchPair, PairingReport, RosterEntry},
    },
};
use serde::{Deserialize, de::DeserializeOwned};

use crate::error::{CliError, Result};

pub async fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| CliError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;

    serde_json::from_str(&content).map_err(|source| CliError::ParseError {
        path: path.to_path_buf(),
        source,
    })
}

/// A roster file holds either full athlete records from the API or bare roster entries.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RosterFile {
    Athletes(Vec<Athlete>),
    Entries(Vec<RosterEntry>),
}

impl RosterFile {
    pub fn into_entries(self) -> Vec<RosterEntry> {
        match self {
            Self::Athletes(athletes) => athletes.iter().map(Athlete::roster_entry).collect(),
            Self::Entries(entries) => entries,
        }
    }
}

pub fn catalog() -> Result<String> {
    Ok(serde_json::to_string_pretty(&Catalog::standard())?)
}

/// Flags override the matching fields of a division file.
pub fn merge_descriptor(
    file: Option<DivisionDescriptor>,
    age_category: Option<String>,
    belt_rank: Option<String>,
) -> Option<DivisionDescriptor> {
    if file.is_none() && age_category.is_none() && belt_rank.is_none() {
        return None;
    }

    let mut descriptor = file.unwrap_or_default();
    if age_category.is_some() {
        descriptor.age_category = age_category;
    }
    if belt_rank.is_some() {
        descriptor.belt_rank = belt_rank;
    }
    Some(descriptor)
}

pub fn match_time(table: &MatchTimeTable, division: Option<&DivisionDescriptor>) -> Result<String> {
    let response = MatchTimeResponse::from(table.resolve(division));
    Ok(serde_json::to_string_pretty(&response)?)
}

fn parse_date(raw: &str) -> Result<NaiveDate> {
    age::parse_birth_date(raw).ok_or_else(|| CliError::InvalidDate(raw.to_string()))
}

pub fn age(dob: &str, today: Option<&str>) -> Result<String> {
    let today = match today {
        Some(raw) => parse_date(raw)?,
        None => Local::now().date_naive(),
    };
    let years = age::age_on(age::parse_birth_date(dob), today);
    Ok(age::display_age(years))
}

pub fn validate_pairs(pairs: &[MatchPair], roster: &[RosterEntry]) -> PairingReport {
    let report = pairing::validate_pairs(pairs, roster);
    for violation in &report.violations {
        tracing::debug!(code = violation.code(), "{}", violation);
    }
    report
}

/// One line per pair, "Name (kg) vs Name (kg)".
pub fn describe_pairs(pairs: &[MatchPair], roster: &[RosterEntry]) -> Vec<String> {
    let name = |id: Option<i64>| match id {
        Some(id) => roster
            .iter()
            .find(|athlete| athlete.id == id)
            .map(RosterEntry::display)
            .unwrap_or_else(|| format!("#{}", id)),
        None => "(empty)".to_string(),
    };

    pairs
        .iter()
        .enumerate()
        .map(|(index, pair)| {
            format!(
                "Match {}: {} vs {}",
                index + 1,
                name(pair.get(Side::Athlete1)),
                name(pair.get(Side::Athlete2))
            )
        })
        .collect()
}

pub fn bracket(matches: &[Match]) -> Vec<String> {
    let mut lines = Vec::new();

    for round in bracket::organize_by_round(matches) {
        lines.push(format!(
            "{} ({} completed, {} in progress, {} pending)",
            round.name, round.completed, round.in_progress, round.pending
        ));

        for m in &round.matches {
            let name = |side| {
                m.athlete(side)
                    .map(|athlete| athlete.name)
                    .unwrap_or_else(|| "TBD".to_string())
            };
            let mut line = format!(
                "  #{} {} vs {} [{}]",
                m.match_number.unwrap_or_default(),
                name(Side::Athlete1),
                name(Side::Athlete2),
                m.status.label()
            );
            if let Some(winner) = m.winner_side() {
                line.push_str(&format!(" winner: {}", name(winner)));
            }
            lines.push(line);
        }
    }

    lines
}

pub fn athletes<'a>(all: &'a [Athlete], enrolled: &[Athlete], search: &str) -> Vec<&'a Athlete> {
    let available = enrollment::available_athletes(all, enrolled);
    enrollment::search_athletes(available, search)
}
