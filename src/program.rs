use std::collections::{BTreeMap, BTreeSet};

use crate::models::{Exercise, ExerciseDetail, Metric, ProgramDay, ProgramExercise};

/// Total length of the challenge in days, rest days included.
pub const CHALLENGE_DAYS: u32 = 90;

const LEVELS: [u32; 3] = [1, 2, 3];

/// Immutable program reference data: the shared 90-day plan, the exercise
/// catalog with its level variants, and the display order for workout
/// rendering. Built once at startup; nothing in the app writes to it.
#[derive(Debug)]
pub struct ProgramCatalog {
    days: BTreeMap<u32, ProgramDay>,
    day_exercises: BTreeMap<u32, Vec<ProgramExercise>>,
    exercises: Vec<Exercise>,
    details: Vec<ExerciseDetail>,
    display_order: Vec<String>,
}

impl ProgramCatalog {
    /// The built-in plan: six training days a week (every seventh day has no
    /// program entry and reads as a rest day), four exercise slots per
    /// training day, each in level variants 1-3, with volume climbing by week.
    pub fn builtin() -> Self {
        let exercises = vec![
            exercise("pushup", "Push-up"),
            exercise("squat", "Squat"),
            exercise("situp", "Sit-up"),
            exercise("plank", "Plank"),
        ];
        let details = vec![
            detail("pushup", 1, "Chest and arm strength; knees down for level 1.", "upper body"),
            detail("squat", 1, "Bodyweight squats, full depth.", "legs"),
            detail("situp", 1, "Controlled sit-ups, feet unanchored.", "core"),
            detail("plank", 2, "Forearm hold, straight line from head to heels.", "core"),
        ];
        let display_order = vec![
            "pushup".to_string(),
            "squat".to_string(),
            "situp".to_string(),
            "plank".to_string(),
        ];

        let workouts = ["Foundation", "Push", "Legs", "Core", "Endurance", "Full Body"];
        let mut days = BTreeMap::new();
        let mut day_exercises = BTreeMap::new();
        for day in 1..=CHALLENGE_DAYS {
            if day % 7 == 0 {
                continue;
            }
            let week = (day - 1) / 7;
            let slot = ((day - 1) % 7) as usize;
            days.insert(
                day,
                ProgramDay {
                    day,
                    workout: workouts[slot % workouts.len()].to_string(),
                    warm_up: Some("5 min jumping jacks and arm circles".to_string()),
                    cool_down: Some("5 min full-body stretch".to_string()),
                },
            );
            day_exercises.insert(day, roster_for_week(week));
        }

        Self {
            days,
            day_exercises,
            exercises,
            details,
            display_order,
        }
    }

    pub fn day_numbers(&self) -> BTreeSet<u32> {
        self.days.keys().copied().collect()
    }

    pub fn day(&self, day: u32) -> Option<&ProgramDay> {
        self.days.get(&day)
    }

    pub fn exercises_for_day(&self, day: u32) -> &[ProgramExercise] {
        self.day_exercises.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn exercises(&self) -> &[Exercise] {
        &self.exercises
    }

    pub fn details(&self) -> &[ExerciseDetail] {
        &self.details
    }

    pub fn display_order(&self) -> &[String] {
        &self.display_order
    }

    pub fn exercise_name(&self, exercise_id: &str) -> Option<&str> {
        self.exercises
            .iter()
            .find(|e| e.id == exercise_id)
            .map(|e| e.name.as_str())
    }

    pub fn has_exercise(&self, exercise_id: &str) -> bool {
        self.exercises.iter().any(|e| e.id == exercise_id)
    }

    pub fn training_day_count(&self) -> usize {
        self.days.len()
    }
}

fn exercise(id: &str, name: &str) -> Exercise {
    Exercise {
        id: id.to_string(),
        name: name.to_string(),
    }
}

fn detail(exercise_id: &str, level: u32, description: &str, focus: &str) -> ExerciseDetail {
    ExerciseDetail {
        exercise_id: exercise_id.to_string(),
        level,
        description: description.to_string(),
        focus: focus.to_string(),
    }
}

fn roster_for_week(week: u32) -> Vec<ProgramExercise> {
    let mut rows = Vec::with_capacity(4 * LEVELS.len());
    for level in LEVELS {
        rows.push(reps_row("pushup", level, 8 + 2 * week + 4 * (level - 1)));
        rows.push(reps_row("squat", level, 12 + 2 * week + 5 * (level - 1)));
        rows.push(reps_row("situp", level, 10 + 2 * week + 4 * (level - 1)));
        rows.push(time_row("plank", level, 1 + week / 4 + (level - 1)));
    }
    rows
}

fn reps_row(exercise_id: &str, level: u32, reps: u32) -> ProgramExercise {
    ProgramExercise {
        exercise_id: exercise_id.to_string(),
        level,
        sets: Some(3),
        reps: Some(reps),
        rounds: None,
        duration_minutes: None,
        metric: Metric::Reps,
    }
}

fn time_row(exercise_id: &str, level: u32, minutes: u32) -> ProgramExercise {
    ProgramExercise {
        exercise_id: exercise_id.to_string(),
        level,
        sets: None,
        reps: None,
        rounds: Some(3),
        duration_minutes: Some(minutes),
        metric: Metric::Time,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_seventh_day_is_a_rest_day() {
        let catalog = ProgramCatalog::builtin();
        let days = catalog.day_numbers();
        for day in 1..=CHALLENGE_DAYS {
            if day % 7 == 0 {
                assert!(!days.contains(&day), "day {day} should be a rest day");
            } else {
                assert!(days.contains(&day), "day {day} should be a training day");
            }
        }
        assert_eq!(catalog.training_day_count(), 78);
    }

    #[test]
    fn training_days_carry_all_level_variants() {
        let catalog = ProgramCatalog::builtin();
        let rows = catalog.exercises_for_day(1);
        assert_eq!(rows.len(), 12);
        for exercise in catalog.exercises() {
            let levels: Vec<u32> = rows
                .iter()
                .filter(|r| r.exercise_id == exercise.id)
                .map(|r| r.level)
                .collect();
            assert_eq!(levels.len(), 3, "{} variants", exercise.id);
        }
    }

    #[test]
    fn rest_days_have_no_roster() {
        let catalog = ProgramCatalog::builtin();
        assert!(catalog.exercises_for_day(7).is_empty());
        assert!(catalog.day(7).is_none());
    }

    #[test]
    fn volume_climbs_across_weeks() {
        let catalog = ProgramCatalog::builtin();
        let reps_on = |day: u32| {
            catalog
                .exercises_for_day(day)
                .iter()
                .find(|r| r.exercise_id == "pushup" && r.level == 1)
                .and_then(|r| r.reps)
                .unwrap()
        };
        assert!(reps_on(78) > reps_on(1));
    }

    #[test]
    fn display_order_covers_the_catalog() {
        let catalog = ProgramCatalog::builtin();
        for exercise in catalog.exercises() {
            assert!(catalog.display_order().contains(&exercise.id));
        }
    }
}
