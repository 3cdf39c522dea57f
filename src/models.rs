use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::progress::TodayStatus;

/// A user's enrollment in the 90-day program. At most one per user,
/// enforced by keying `AppData::challenges` on the user id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Challenge {
    pub user_id: String,
    /// Progress pointer, 1-90. Authoritative; never derived from `started_at`.
    pub current_day: u32,
    /// Difficulty preference feeding exercise selection.
    pub level: u32,
    pub paused_until: Option<NaiveDate>,
    pub started_at: NaiveDate,
}

/// One logged exercise result. Append-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub user_id: String,
    /// Program day the result was recorded for.
    pub day: u32,
    pub exercise_id: String,
    pub reps: u32,
    pub recorded_on: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppData {
    pub challenges: BTreeMap<String, Challenge>,
    pub sessions: Vec<Session>,
}

impl AppData {
    pub fn sessions_for<'a>(&'a self, user_id: &str) -> impl Iterator<Item = &'a Session> {
        self.sessions.iter().filter(move |s| s.user_id == user_id)
    }
}

/// Fixed daily workout definition, shared by all users.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgramDay {
    pub day: u32,
    pub workout: String,
    pub warm_up: Option<String>,
    pub cool_down: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    Reps,
    Time,
}

/// One level variant of an exercise slot on a program day. Several rows may
/// share an `exercise_id`; the selector reduces them to one per slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgramExercise {
    pub exercise_id: String,
    pub level: u32,
    pub sets: Option<u32>,
    pub reps: Option<u32>,
    pub rounds: Option<u32>,
    pub duration_minutes: Option<u32>,
    pub metric: Metric,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exercise {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseDetail {
    pub exercise_id: String,
    pub level: u32,
    pub description: String,
    pub focus: String,
}

#[derive(Debug, Deserialize)]
pub struct DayRequest {
    pub day: u32,
}

#[derive(Debug, Deserialize)]
pub struct LevelRequest {
    pub level: u32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChallengeResponse {
    /// "none" | "active" | "paused" | "expired"
    pub state: String,
    pub current_day: Option<u32>,
    pub level: Option<u32>,
    pub started_at: Option<String>,
    pub paused_until: Option<String>,
    pub pause_days_left: Option<i64>,
    pub completed_days: Option<usize>,
    pub remaining_days: Option<usize>,
    pub today_status: Option<TodayStatus>,
    pub challenge_complete: Option<bool>,
}

impl ChallengeResponse {
    pub fn none() -> Self {
        Self {
            state: "none".to_string(),
            current_day: None,
            level: None,
            started_at: None,
            paused_until: None,
            pause_days_left: None,
            completed_days: None,
            remaining_days: None,
            today_status: None,
            challenge_complete: None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WorkoutExercise {
    pub exercise_id: String,
    pub name: String,
    pub level: u32,
    pub sets: Option<u32>,
    pub reps: Option<u32>,
    pub rounds: Option<u32>,
    pub duration_minutes: Option<u32>,
    pub metric: Metric,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WorkoutResponse {
    pub day: u32,
    pub today_status: TodayStatus,
    pub workout: Option<String>,
    pub warm_up: Option<String>,
    pub cool_down: Option<String>,
    pub exercises: Vec<WorkoutExercise>,
}

#[derive(Debug, Deserialize)]
pub struct CompleteRequest {
    pub results: Vec<ExerciseResult>,
}

#[derive(Debug, Deserialize)]
pub struct ExerciseResult {
    pub exercise_id: String,
    pub reps: u32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CompleteResponse {
    pub recorded: usize,
    pub next_day: u32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ExerciseView {
    pub id: String,
    pub name: String,
    pub level: u32,
    pub description: String,
    pub focus: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HistoryPoint {
    pub date: String,
    pub reps: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HistoryResponse {
    pub days: Vec<HistoryPoint>,
    pub total_reps: u64,
    pub active_days: usize,
}
