//! Manual match pairings for a division.
//!
//! Pairings are authored one slot at a time before being sent to the tournament API.
//! [`available_candidates`] keeps already-paired athletes out of the other slots while
//! editing and [`validate_pairs`] re-checks the whole batch right before submission.
//! Neither is authoritative; the backend validates again.

use std::collections::{HashMap, HashSet};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;
use utoipa::ToSchema;

use crate::error::{Result, RulesError};
use crate::models::Side;

/// A proposed bout. Either slot may still be empty while the form is being filled in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MatchPair {
    pub athlete1: Option<i64>,
    pub athlete2: Option<i64>,
}

impl MatchPair {
    pub fn new(athlete1: i64, athlete2: i64) -> Self {
        Self {
            athlete1: Some(athlete1),
            athlete2: Some(athlete2),
        }
    }

    pub fn get(&self, side: Side) -> Option<i64> {
        match side {
            Side::Athlete1 => self.athlete1,
            Side::Athlete2 => self.athlete2,
        }
    }

    pub fn set(&mut self, side: Side, athlete: Option<i64>) {
        match side {
            Side::Athlete1 => self.athlete1 = athlete,
            Side::Athlete2 => self.athlete2 = athlete,
        }
    }

    fn slots(&self) -> impl Iterator<Item = i64> + '_ {
        self.athlete1.into_iter().chain(self.athlete2)
    }
}

/// An athlete enrolled in the division being paired.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RosterEntry {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    #[schema(value_type = Option<f64>)]
    pub weight: Option<Decimal>,
    #[serde(default)]
    pub team: Option<String>,
}

impl RosterEntry {
    /// "Name (82.5kg)", or just the name when no weight is known.
    pub fn display(&self) -> String {
        match self.weight {
            Some(weight) => format!("{} ({}kg)", self.name, weight.normalize()),
            None => self.name.clone(),
        }
    }
}

/// A rule broken by a pairing batch. `Display` yields the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PairingViolation {
    #[error("Please add at least one match")]
    NoPairs,

    #[error("Match {position}: both athletes must be selected")]
    Incomplete { position: usize },

    #[error("Match {position}: cannot match an athlete with themselves")]
    SelfMatch { position: usize },

    #[error("Match {position}: athlete {athlete} is not enrolled in this division")]
    UnknownAthlete { position: usize, athlete: i64 },

    #[error("Match {position}: athlete {name} is already paired in match {first_position}")]
    AlreadyPaired {
        position: usize,
        athlete: i64,
        name: String,
        first_position: usize,
    },
}

impl PairingViolation {
    pub fn code(&self) -> &'static str {
        match self {
            Self::NoPairs => "no_pairs",
            Self::Incomplete { .. } => "incomplete_pair",
            Self::SelfMatch { .. } => "self_match",
            Self::UnknownAthlete { .. } => "unknown_athlete",
            Self::AlreadyPaired { .. } => "already_paired",
        }
    }

    /// 1-based position of the offending pair, if the violation concerns one.
    pub fn position(&self) -> Option<usize> {
        match self {
            Self::NoPairs => None,
            Self::Incomplete { position }
            | Self::SelfMatch { position }
            | Self::UnknownAthlete { position, .. }
            | Self::AlreadyPaired { position, .. } => Some(*position),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PairingReport {
    pub violations: Vec<PairingViolation>,
}

impl PairingReport {
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn messages(&self) -> Vec<String> {
        self.violations.iter().map(ToString::to_string).collect()
    }

    pub fn into_result(self) -> Result<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(RulesError::InvalidPairings(self.messages()))
        }
    }
}

/// Roster entries that may still be chosen for `side` of the pair at `index`: everyone not
/// used by another pair and not already standing in the opposite slot.
pub fn available_candidates<'a>(
    pairs: &[MatchPair],
    index: usize,
    side: Side,
    roster: &'a [RosterEntry],
) -> Vec<&'a RosterEntry> {
    let taken: HashSet<i64> = pairs
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != index)
        .flat_map(|(_, pair)| pair.slots())
        .collect();
    let opponent = pairs.get(index).and_then(|pair| pair.get(side.other()));

    roster
        .iter()
        .filter(|athlete| !taken.contains(&athlete.id) && Some(athlete.id) != opponent)
        .collect()
}

/// Checks every pair and returns all violations in pair order.
pub fn validate_pairs(pairs: &[MatchPair], roster: &[RosterEntry]) -> PairingReport {
    let mut report = PairingReport::default();

    if pairs.is_empty() {
        report.violations.push(PairingViolation::NoPairs);
        return report;
    }

    let names: HashMap<i64, &str> = roster
        .iter()
        .map(|athlete| (athlete.id, athlete.name.as_str()))
        .collect();
    let mut first_seen: HashMap<i64, usize> = HashMap::new();

    for (index, pair) in pairs.iter().enumerate() {
        let position = index + 1;

        if pair.athlete1.is_none() || pair.athlete2.is_none() {
            report
                .violations
                .push(PairingViolation::Incomplete { position });
        }

        if let (Some(a), Some(b)) = (pair.athlete1, pair.athlete2)
            && a == b
        {
            report
                .violations
                .push(PairingViolation::SelfMatch { position });
        }

        let mut ids: Vec<i64> = pair.slots().collect();
        ids.dedup();

        for athlete in ids {
            let Some(name) = names.get(&athlete) else {
                report
                    .violations
                    .push(PairingViolation::UnknownAthlete { position, athlete });
                continue;
            };

            match first_seen.get(&athlete) {
                Some(&first_position) => {
                    report.violations.push(PairingViolation::AlreadyPaired {
                        position,
                        athlete,
                        name: (*name).to_string(),
                        first_position,
                    });
                }
                None => {
                    first_seen.insert(athlete, position);
                }
            }
        }
    }

    debug!(
        pairs = pairs.len(),
        violations = report.violations.len(),
        "Validated match pairings"
    );

    report
}

/// In-progress list of pairings for one division.
#[derive(Debug, Clone)]
pub struct PairingDraft {
    roster: Vec<RosterEntry>,
    pairs: Vec<MatchPair>,
}

impl PairingDraft {
    /// Starts with one empty pair when at least two athletes can be paired.
    pub fn new(roster: Vec<RosterEntry>) -> Self {
        let pairs = if roster.len() >= 2 {
            vec![MatchPair::default()]
        } else {
            Vec::new()
        };
        Self { roster, pairs }
    }

    pub fn roster(&self) -> &[RosterEntry] {
        &self.roster
    }

    pub fn pairs(&self) -> &[MatchPair] {
        &self.pairs
    }

    pub fn can_pair(&self) -> bool {
        self.roster.len() >= 2
    }

    pub fn add_pair(&mut self) -> usize {
        self.pairs.push(MatchPair::default());
        self.pairs.len() - 1
    }

    pub fn remove_pair(&mut self, index: usize) -> Option<MatchPair> {
        (index < self.pairs.len()).then(|| self.pairs.remove(index))
    }

    /// Fills or clears a slot. Returns `false` when `index` is out of range.
    pub fn set_slot(&mut self, index: usize, side: Side, athlete: Option<i64>) -> bool {
        match self.pairs.get_mut(index) {
            Some(pair) => {
                pair.set(side, athlete);
                true
            }
            None => false,
        }
    }

    pub fn candidates(&self, index: usize, side: Side) -> Vec<&RosterEntry> {
        available_candidates(&self.pairs, index, side, &self.roster)
    }

    pub fn validate(&self) -> PairingReport {
        validate_pairs(&self.pairs, &self.roster)
    }

    /// Id pairs in the form the match creation endpoint accepts.
    pub fn into_submission(self) -> Result<Vec<[i64; 2]>> {
        self.validate().into_result()?;

        Ok(self
            .pairs
            .iter()
            .filter_map(|pair| Some([pair.athlete1?, pair.athlete2?]))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Vec<RosterEntry> {
        [(1, "Ana"), (2, "Bruno"), (3, "Carla"), (4, "Diego")]
            .into_iter()
            .map(|(id, name)| RosterEntry {
                id,
                name: name.to_string(),
                weight: Some(Decimal::new(700 + id * 10, 1)),
                team: None,
            })
            .collect()
    }

    fn ids(entries: Vec<&RosterEntry>) -> Vec<i64> {
        entries.iter().map(|athlete| athlete.id).collect()
    }

    #[test]
    fn test_valid_single_pair() {
        let report = validate_pairs(&[MatchPair::new(1, 2)], &roster());
        assert!(report.is_valid());
        assert!(report.messages().is_empty());
    }

    #[test]
    fn test_valid_disjoint_pairs() {
        let report = validate_pairs(&[MatchPair::new(1, 2), MatchPair::new(3, 4)], &roster());
        assert!(report.is_valid());
    }

    #[test]
    fn test_self_match() {
        let report = validate_pairs(&[MatchPair::new(1, 1)], &roster());
        assert_eq!(
            report.messages(),
            vec!["Match 1: cannot match an athlete with themselves"]
        );
    }

    #[test]
    fn test_incomplete_pair() {
        let pairs = [MatchPair {
            athlete1: None,
            athlete2: Some(2),
        }];
        let report = validate_pairs(&pairs, &roster());
        assert_eq!(
            report.messages(),
            vec!["Match 1: both athletes must be selected"]
        );
    }

    #[test]
    fn test_empty_pair_is_only_incomplete() {
        let report = validate_pairs(&[MatchPair::default()], &roster());
        assert_eq!(report.violations, vec![PairingViolation::Incomplete { position: 1 }]);
    }

    #[test]
    fn test_reuse_across_pairs_reported_once() {
        let report = validate_pairs(&[MatchPair::new(1, 2), MatchPair::new(2, 3)], &roster());
        assert_eq!(report.violations.len(), 1);
        assert_eq!(
            report.violations[0],
            PairingViolation::AlreadyPaired {
                position: 2,
                athlete: 2,
                name: "Bruno".to_string(),
                first_position: 1,
            }
        );
        assert_eq!(
            report.messages()[0],
            "Match 2: athlete Bruno is already paired in match 1"
        );
    }

    #[test]
    fn test_unknown_athlete() {
        let report = validate_pairs(&[MatchPair::new(1, 99)], &roster());
        assert_eq!(
            report.violations,
            vec![PairingViolation::UnknownAthlete {
                position: 1,
                athlete: 99
            }]
        );
    }

    #[test]
    fn test_collects_every_violation_in_order() {
        let pairs = [
            MatchPair::new(1, 2),
            MatchPair {
                athlete1: Some(3),
                athlete2: None,
            },
            MatchPair::new(4, 4),
            MatchPair::new(1, 3),
        ];
        let report = validate_pairs(&pairs, &roster());
        let positions: Vec<Option<usize>> =
            report.violations.iter().map(PairingViolation::position).collect();
        let codes: Vec<&str> = report.violations.iter().map(PairingViolation::code).collect();

        assert_eq!(positions, vec![Some(2), Some(3), Some(4), Some(4)]);
        assert_eq!(
            codes,
            vec!["incomplete_pair", "self_match", "already_paired", "already_paired"]
        );
    }

    #[test]
    fn test_no_pairs() {
        let report = validate_pairs(&[], &roster());
        assert_eq!(report.messages(), vec!["Please add at least one match"]);
    }

    #[test]
    fn test_candidates_exclude_other_pairs_and_opponent() {
        let roster = roster();
        let pairs = [
            MatchPair::new(1, 2),
            MatchPair {
                athlete1: Some(3),
                athlete2: None,
            },
        ];

        assert_eq!(ids(available_candidates(&pairs, 1, Side::Athlete2, &roster)), vec![4]);
        assert_eq!(
            ids(available_candidates(&pairs, 1, Side::Athlete1, &roster)),
            vec![3, 4]
        );
        assert_eq!(
            ids(available_candidates(&pairs, 0, Side::Athlete1, &roster)),
            vec![1, 4]
        );
    }

    #[test]
    fn test_candidates_for_out_of_range_index() {
        let roster = roster();
        let pairs = [MatchPair::new(1, 2)];
        assert_eq!(
            ids(available_candidates(&pairs, 5, Side::Athlete1, &roster)),
            vec![3, 4]
        );
    }

    #[test]
    fn test_draft_starts_with_one_pair() {
        assert_eq!(PairingDraft::new(roster()).pairs().len(), 1);

        let lonely = PairingDraft::new(roster().into_iter().take(1).collect());
        assert!(lonely.pairs().is_empty());
        assert!(!lonely.can_pair());
    }

    #[test]
    fn test_draft_flow() {
        let mut draft = PairingDraft::new(roster());
        assert!(draft.set_slot(0, Side::Athlete1, Some(1)));
        assert!(draft.set_slot(0, Side::Athlete2, Some(2)));

        let second = draft.add_pair();
        assert_eq!(ids(draft.candidates(second, Side::Athlete1)), vec![3, 4]);
        draft.set_slot(second, Side::Athlete1, Some(3));
        draft.set_slot(second, Side::Athlete2, Some(4));
        assert!(!draft.set_slot(9, Side::Athlete1, Some(1)));

        assert_eq!(draft.into_submission().unwrap(), vec![[1, 2], [3, 4]]);
    }

    #[test]
    fn test_draft_remove_pair() {
        let mut draft = PairingDraft::new(roster());
        draft.add_pair();
        assert_eq!(draft.remove_pair(1), Some(MatchPair::default()));
        assert_eq!(draft.remove_pair(3), None);
        assert_eq!(draft.pairs().len(), 1);
    }

    #[test]
    fn test_draft_submission_rejected() {
        let draft = PairingDraft::new(roster());
        match draft.into_submission() {
            Err(RulesError::InvalidPairings(messages)) => {
                assert_eq!(messages, vec!["Match 1: both athletes must be selected"]);
            }
            other => panic!("expected invalid pairings, got {other:?}"),
        }
    }

    #[test]
    fn test_roster_display() {
        let entry = &roster()[0];
        assert_eq!(entry.display(), "Ana (71kg)");
    }
}
