use chrono::{DateTime, Utc};

/// "m:ss", minutes unpadded.
pub fn format_clock(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

pub fn remaining(duration_seconds: u32, elapsed_seconds: u32) -> u32 {
    duration_seconds.saturating_sub(elapsed_seconds)
}

/// Whole seconds between `start` and `now`; zero if the start lies in the future.
pub fn elapsed_since(start: DateTime<Utc>, now: DateTime<Utc>) -> u32 {
    let seconds = (now - start).num_seconds().max(0);
    u32::try_from(seconds).unwrap_or(u32::MAX)
}
