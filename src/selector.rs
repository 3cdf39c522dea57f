use std::collections::BTreeMap;

use crate::models::ProgramExercise;

/// Reduces a day's roster to exactly one row per exercise slot for the
/// requested level, ordered for display.
///
/// Precedence per slot: an exact level match; otherwise the lowest level
/// strictly above the request (the program prefers pushing up over easing
/// off); otherwise the lowest level on offer.
///
/// `display_order` lists exercise ids in display position; ids not listed
/// sort after it by id.
pub fn select(
    rows: &[ProgramExercise],
    level: u32,
    display_order: &[String],
) -> Vec<ProgramExercise> {
    let mut by_exercise: BTreeMap<&str, Vec<&ProgramExercise>> = BTreeMap::new();
    for row in rows {
        by_exercise.entry(&row.exercise_id).or_default().push(row);
    }

    let mut selected: Vec<ProgramExercise> = Vec::with_capacity(by_exercise.len());
    for variants in by_exercise.values() {
        if let Some(row) = pick(variants, level) {
            selected.push(row.clone());
        }
    }

    selected.sort_by(|a, b| {
        display_rank(&a.exercise_id, display_order)
            .cmp(&display_rank(&b.exercise_id, display_order))
            .then_with(|| a.exercise_id.cmp(&b.exercise_id))
    });
    selected
}

fn pick<'a>(variants: &[&'a ProgramExercise], level: u32) -> Option<&'a ProgramExercise> {
    if let Some(exact) = variants.iter().find(|row| row.level == level) {
        return Some(exact);
    }
    variants
        .iter()
        .filter(|row| row.level > level)
        .min_by_key(|row| row.level)
        .or_else(|| variants.iter().min_by_key(|row| row.level))
        .copied()
}

fn display_rank(exercise_id: &str, display_order: &[String]) -> usize {
    display_order
        .iter()
        .position(|id| id == exercise_id)
        .unwrap_or(display_order.len())
}
