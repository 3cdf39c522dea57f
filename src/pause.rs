use chrono::{Duration, NaiveDate};

/// Length of a pause window in days. Pausing always sets
/// `paused_until = today + PAUSE_DAYS`, overwriting any prior value.
pub const PAUSE_DAYS: i64 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PauseState {
    /// No pause date set.
    Active,
    /// Pause date is today or later; zero means it ends today.
    Paused { remaining_days: i64 },
    /// Pause date has passed without a resume.
    Expired,
}

pub fn evaluate(paused_until: Option<NaiveDate>, today: NaiveDate) -> PauseState {
    match paused_until {
        None => PauseState::Active,
        Some(until) if until >= today => PauseState::Paused {
            remaining_days: (until - today).num_days(),
        },
        Some(_) => PauseState::Expired,
    }
}

pub fn pause_window(today: NaiveDate) -> NaiveDate {
    today + Duration::days(PAUSE_DAYS)
}

/// Pausing is only allowed while no pause window exists.
pub fn can_pause(state: PauseState) -> bool {
    state == PauseState::Active
}

/// Resuming clears the window; valid whether or not it already lapsed.
pub fn can_resume(state: PauseState) -> bool {
    !matches!(state, PauseState::Active)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn no_pause_date_is_active() {
        let today = day(2026, 3, 10);
        assert_eq!(evaluate(None, today), PauseState::Active);
    }

    #[test]
    fn future_pause_date_reports_remaining_days() {
        let today = day(2026, 3, 10);
        assert_eq!(
            evaluate(Some(day(2026, 3, 14)), today),
            PauseState::Paused { remaining_days: 4 }
        );
    }

    #[test]
    fn pause_date_today_is_still_paused() {
        let today = day(2026, 3, 10);
        assert_eq!(
            evaluate(Some(today), today),
            PauseState::Paused { remaining_days: 0 }
        );
    }

    #[test]
    fn past_pause_date_is_expired() {
        let today = day(2026, 3, 10);
        assert_eq!(evaluate(Some(day(2026, 3, 9)), today), PauseState::Expired);
    }

    #[test]
    fn pause_window_is_seven_days_from_today() {
        let today = day(2026, 2, 26);
        assert_eq!(pause_window(today), day(2026, 3, 5));
    }

    #[test]
    fn pause_allowed_only_from_active() {
        assert!(can_pause(PauseState::Active));
        assert!(!can_pause(PauseState::Paused { remaining_days: 3 }));
        assert!(!can_pause(PauseState::Expired));
    }

    #[test]
    fn resume_allowed_from_paused_and_expired() {
        assert!(!can_resume(PauseState::Active));
        assert!(can_resume(PauseState::Paused { remaining_days: 0 }));
        assert!(can_resume(PauseState::Expired));
    }
}
