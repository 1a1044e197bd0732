use std::rc::Rc;

use gymatlas_domain::{CompletedSets, SessionError, WorkoutID, WorkoutService};
use log::{debug, warn};

use crate::Debouncer;

/// Completed sets of an ongoing workout.
///
/// Every change is saved after the quiet period of the debouncer. A pending save is
/// dropped together with the progress.
pub struct WorkoutProgress<S> {
    service: Rc<S>,
    workout_id: WorkoutID,
    completed_sets: CompletedSets,
    debouncer: Debouncer,
}

impl<S: WorkoutService + 'static> WorkoutProgress<S> {
    pub async fn load(service: Rc<S>, workout_id: WorkoutID) -> Self {
        let completed_sets = match service.get_completed_sets(workout_id).await {
            Ok(completed_sets) => completed_sets,
            Err(err) => {
                debug!("starting without completed sets of workout {workout_id}: {err}");
                CompletedSets::default()
            }
        };
        Self::new(service, workout_id, completed_sets)
    }

    pub fn new(service: Rc<S>, workout_id: WorkoutID, completed_sets: CompletedSets) -> Self {
        Self {
            service,
            workout_id,
            completed_sets,
            debouncer: Debouncer::default(),
        }
    }

    /// Returns whether the set is completed afterwards.
    pub fn toggle(&mut self, exercise_idx: usize, set_idx: usize) -> bool {
        let completed = self.completed_sets.toggle(exercise_idx, set_idx);
        self.schedule_save();
        completed
    }

    #[must_use]
    pub fn completed_sets(&self) -> &CompletedSets {
        &self.completed_sets
    }

    #[must_use]
    pub fn is_completed(&self, exercise_idx: usize, set_idx: usize) -> bool {
        self.completed_sets.is_completed(exercise_idx, set_idx)
    }

    #[must_use]
    pub fn progress(&self, exercise_idx: usize, set_count: usize) -> f64 {
        self.completed_sets.progress(exercise_idx, set_count)
    }

    fn schedule_save(&mut self) {
        let service = Rc::clone(&self.service);
        let workout_id = self.workout_id;
        let completed_sets = self.completed_sets.clone();
        self.debouncer.call(move || {
            wasm_bindgen_futures::spawn_local(async move {
                if let Err(err) = service
                    .replace_completed_sets(workout_id, completed_sets)
                    .await
                {
                    if !err.is_no_session() {
                        warn!("completed sets of workout {workout_id} not saved: {err}");
                    }
                }
            });
        });
    }
}
