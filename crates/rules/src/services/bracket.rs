use std::collections::BTreeMap;

use serde::Serialize;
use utoipa::ToSchema;

use crate::models::{Match, MatchStatus};

/// Where a match stands for bracket display purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchProgress {
    Pending,
    InProgress,
    Completed,
    Cancelled,
}

impl MatchProgress {
    /// A pending match that already has a start time is treated as running.
    pub fn of(m: &Match) -> Self {
        match m.status {
            MatchStatus::Completed | MatchStatus::Walkover => Self::Completed,
            MatchStatus::InProgress => Self::InProgress,
            MatchStatus::Cancelled => Self::Cancelled,
            MatchStatus::Pending if m.start_time.is_some() => Self::InProgress,
            MatchStatus::Pending => Self::Pending,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Round {
    pub round_number: u32,
    pub name: String,
    pub matches: Vec<Match>,
    pub completed: usize,
    pub in_progress: usize,
    pub pending: usize,
    pub cancelled: usize,
}

impl Round {
    fn new(round_number: u32, total_rounds: usize, mut matches: Vec<Match>) -> Self {
        matches.sort_by_key(|m| (m.match_number.unwrap_or(u32::MAX), m.id));

        let mut round = Self {
            round_number,
            name: round_name(round_number, total_rounds),
            matches: Vec::new(),
            completed: 0,
            in_progress: 0,
            pending: 0,
            cancelled: 0,
        };
        for m in &matches {
            match MatchProgress::of(m) {
                MatchProgress::Completed => round.completed += 1,
                MatchProgress::InProgress => round.in_progress += 1,
                MatchProgress::Pending => round.pending += 1,
                MatchProgress::Cancelled => round.cancelled += 1,
            }
        }
        round.matches = matches;
        round
    }

    pub fn is_complete(&self) -> bool {
        self.in_progress == 0 && self.pending == 0
    }
}

/// "Final", "Semi-Finals" and "Quarter-Finals" count back from the last round.
pub fn round_name(round: u32, total_rounds: usize) -> String {
    let from_last = usize::try_from(round)
        .ok()
        .and_then(|round| total_rounds.checked_sub(round));

    match from_last {
        Some(0) => "Final".to_string(),
        Some(1) => "Semi-Finals".to_string(),
        Some(2) => "Quarter-Finals".to_string(),
        _ => format!("Round {round}"),
    }
}

/// Groups matches into rounds, ascending, each ordered by match number.
pub fn organize_by_round(matches: &[Match]) -> Vec<Round> {
    let mut grouped: BTreeMap<u32, Vec<Match>> = BTreeMap::new();
    for m in matches {
        grouped.entry(m.round()).or_default().push(m.clone());
    }

    let total_rounds = grouped.len();
    grouped
        .into_iter()
        .map(|(number, matches)| Round::new(number, total_rounds, matches))
        .collect()
}
