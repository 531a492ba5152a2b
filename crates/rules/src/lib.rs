//! Tournament rules for Brazilian jiu-jitsu events: belt, age and weight catalogs, match
//! durations, pairing checks and the small pieces of bracket and scoring logic the
//! operator tools share.

pub mod dto;
pub mod error;
pub mod models;
pub mod services;

pub use error::{Result, RulesError};
pub use services::match_duration::{MatchDuration, MatchTimeTable, resolve_match_duration};
pub use services::pairing::{MatchPair, PairingReport, RosterEntry, validate_pairs};
