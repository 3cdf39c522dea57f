use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::models::Challenge;
use crate::pause::{self, PauseState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TodayStatus {
    /// The pause window covers today.
    RestingPaused,
    /// The current day number has no program entry.
    RestDay,
    /// At least one session exists for the current day.
    Done,
    Pending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressSummary {
    /// Distinct program days with at least one session. A day counts as done
    /// the moment any one exercise on it has a logged result.
    pub completed_count: usize,
    pub remaining_count: usize,
    pub today_status: TodayStatus,
    /// The pointer has moved past the last program day.
    pub challenge_complete: bool,
}

/// Computes progress from already-fetched rows. The challenge's own
/// `current_day` pointer decides what "today" means; `started_at` plays
/// no part in it.
pub fn resolve(
    challenge: &Challenge,
    program_days: &BTreeSet<u32>,
    session_days: &BTreeSet<u32>,
    today: NaiveDate,
) -> ProgressSummary {
    let completed_count = session_days.intersection(program_days).count();
    let remaining_count = program_days.len().saturating_sub(completed_count);

    let last_day = program_days.iter().next_back().copied().unwrap_or(0);
    let challenge_complete = challenge.current_day > last_day;

    let paused = matches!(
        pause::evaluate(challenge.paused_until, today),
        PauseState::Paused { .. }
    );
    let today_status = if paused {
        TodayStatus::RestingPaused
    } else if !program_days.contains(&challenge.current_day) {
        TodayStatus::RestDay
    } else if session_days.contains(&challenge.current_day) {
        TodayStatus::Done
    } else {
        TodayStatus::Pending
    };

    ProgressSummary {
        completed_count,
        remaining_count,
        today_status,
        challenge_complete,
    }
}
