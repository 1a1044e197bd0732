use chrono::NaiveDate;
use log::{debug, warn};

use crate::{Catalog, CreateError, ExerciseID, ReadError, Workout, WorkoutSet, workout};

#[allow(async_fn_in_trait)]
pub trait ExerciseHistoryService {
    async fn get_exercise_history(
        &self,
        exercise_id: ExerciseID,
    ) -> Result<Vec<HistoryEntry>, ReadError>;
    async fn create_exercise_history(
        &self,
        exercise_id: ExerciseID,
        date: NaiveDate,
        sets: Vec<WorkoutSet>,
    ) -> Result<HistoryEntry, CreateError>;
}

#[allow(async_fn_in_trait)]
pub trait ExerciseHistoryRepository {
    async fn read_exercise_history(
        &self,
        exercise_id: ExerciseID,
    ) -> Result<Vec<HistoryEntry>, ReadError>;
    async fn create_exercise_history(
        &self,
        exercise_id: ExerciseID,
        date: NaiveDate,
        sets: Vec<WorkoutSet>,
    ) -> Result<HistoryEntry, CreateError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub date: NaiveDate,
    pub sets: Vec<WorkoutSet>,
}

impl HistoryEntry {
    #[must_use]
    pub fn max_weight(&self) -> u32 {
        workout::max_weight(&self.sets)
    }
}

/// Dates and maximum weights of all entries, oldest first.
#[must_use]
pub fn max_weight_progression(history: &[HistoryEntry]) -> Vec<(NaiveDate, u32)> {
    let mut progression = history
        .iter()
        .map(|e| (e.date, e.max_weight()))
        .collect::<Vec<_>>();
    progression.sort_by_key(|(date, _)| *date);
    progression
}

/// Adds an entry to the history of each exercise of `workout`.
///
/// Failures are logged and do not stop the remaining exercises. Returns the number of
/// recorded entries.
pub async fn record_workout_history(
    service: &impl ExerciseHistoryService,
    workout: &Workout,
    catalog: &Catalog,
) -> usize {
    let mut recorded = 0;

    for exercise in &workout.exercises {
        let exercise_id = exercise.exercise_id(catalog);
        match service
            .create_exercise_history(exercise_id.clone(), workout.date, exercise.sets.clone())
            .await
        {
            Ok(_) => {
                debug!("recorded history of \"{exercise_id}\"");
                recorded += 1;
            }
            Err(err) => warn!("failed to record history of \"{exercise_id}\": {err}"),
        }
    }

    recorded
}
