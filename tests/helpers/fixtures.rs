// ABOUTME: Routine draft fixtures shared by integration tests
// ABOUTME: Builds pyramidal and free-text exercise rows with known weights

use trainer_routines::models::{ExerciseEntry, RoutineDraft};
use uuid::Uuid;

/// Pyramidal bench press with the given per-series weights
pub fn pyramid_bench(weights: [&str; 5]) -> ExerciseEntry {
    let mut exercise = ExerciseEntry::new("Bench press", 10.0);
    exercise.set_reps("15").unwrap();
    exercise.enable_pyramidal();
    for (step, weight) in weights.into_iter().enumerate() {
        exercise.set_step_weight(step, weight).unwrap();
    }
    exercise
}

/// Free-text deadlift row
pub fn free_text_deadlift(weight: &str) -> ExerciseEntry {
    let mut exercise = ExerciseEntry::new("Deadlift", 7.5);
    exercise.set_reps("5").unwrap();
    exercise.set_weight(weight).unwrap();
    exercise.series = Some(3);
    exercise
}

/// Draft holding one pyramidal and one free-text exercise
pub fn push_pull_draft() -> RoutineDraft {
    let mut draft = RoutineDraft::new(Uuid::new_v4(), "Push / pull");
    draft.description = "Week 1".to_owned();
    draft
        .exercises
        .push(pyramid_bench(["20", "22", "24.2", "26.6", "29.3"]));
    draft.exercises.push(free_text_deadlift("35kg"));
    draft
}
