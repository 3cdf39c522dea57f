use chrono::{Duration, Local, NaiveDate};
use std::collections::BTreeMap;

use crate::models::{HistoryPoint, HistoryResponse, Session};

const HISTORY_DAYS: usize = 30;

pub fn build_history(sessions: &[Session]) -> HistoryResponse {
    build_history_at(Local::now().date_naive(), sessions)
}

/// Total reps per calendar day for the trailing window, plus all-time
/// totals. Days without sessions appear with zero reps so the chart axis
/// stays continuous.
pub fn build_history_at(today: NaiveDate, sessions: &[Session]) -> HistoryResponse {
    let mut reps_by_day: BTreeMap<NaiveDate, u64> = BTreeMap::new();
    for session in sessions {
        *reps_by_day.entry(session.recorded_on).or_default() += u64::from(session.reps);
    }

    let mut days = Vec::with_capacity(HISTORY_DAYS);
    for offset in (0..HISTORY_DAYS).rev() {
        let date = today - Duration::days(offset as i64);
        days.push(HistoryPoint {
            date: date.to_string(),
            reps: reps_by_day.get(&date).copied().unwrap_or(0),
        });
    }

    HistoryResponse {
        days,
        total_reps: reps_by_day.values().sum(),
        active_days: reps_by_day.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(day: u32, reps: u32, recorded_on: NaiveDate) -> Session {
        Session {
            user_id: "u1".to_string(),
            day,
            exercise_id: "pushup".to_string(),
            reps,
            recorded_on,
        }
    }

    #[test]
    fn history_sums_reps_per_day() {
        let today = NaiveDate::from_ymd_opt(2026, 1, 20).unwrap();
        let two_days_ago = today - Duration::days(2);
        let sessions = vec![
            session(1, 10, two_days_ago),
            session(1, 15, two_days_ago),
            session(2, 12, today),
        ];

        let history = build_history_at(today, &sessions);
        assert_eq!(history.days.len(), HISTORY_DAYS);
        let point = history
            .days
            .iter()
            .find(|p| p.date == two_days_ago.to_string())
            .expect("missing day");
        assert_eq!(point.reps, 25);
        assert_eq!(history.total_reps, 37);
        assert_eq!(history.active_days, 2);
    }

    #[test]
    fn days_without_sessions_read_zero() {
        let today = NaiveDate::from_ymd_opt(2026, 1, 20).unwrap();
        let history = build_history_at(today, &[]);
        assert_eq!(history.days.len(), HISTORY_DAYS);
        assert!(history.days.iter().all(|p| p.reps == 0));
        assert_eq!(history.total_reps, 0);
        assert_eq!(history.active_days, 0);
    }

    #[test]
    fn sessions_outside_the_window_still_count_toward_totals() {
        let today = NaiveDate::from_ymd_opt(2026, 6, 1).unwrap();
        let long_ago = today - Duration::days(200);
        let history = build_history_at(today, &[session(1, 40, long_ago)]);
        assert!(history.days.iter().all(|p| p.reps == 0));
        assert_eq!(history.total_reps, 40);
        assert_eq!(history.active_days, 1);
    }
}
