use std::{collections::BTreeSet, fmt};

use chrono::{Datelike, Duration, NaiveDate};
use derive_more::{Deref, Display};

use crate::{Catalog, CreateError, DeleteError, ExerciseID, ReadError, UpdateError};

#[allow(async_fn_in_trait)]
pub trait WorkoutService {
    async fn get_workouts(&self) -> Result<Vec<Workout>, ReadError>;
    async fn get_workout(&self, id: WorkoutID) -> Result<Workout, ReadError>;
    async fn create_workout(
        &self,
        name: String,
        date: NaiveDate,
        notes: String,
        exercises: Vec<WorkoutExercise>,
    ) -> Result<Workout, CreateError>;
    async fn replace_workout(&self, workout: Workout) -> Result<Workout, UpdateError>;
    async fn delete_workout(&self, id: WorkoutID) -> Result<WorkoutID, DeleteError>;
    async fn get_completed_sets(&self, id: WorkoutID) -> Result<CompletedSets, ReadError>;
    async fn replace_completed_sets(
        &self,
        id: WorkoutID,
        completed_sets: CompletedSets,
    ) -> Result<CompletedSets, UpdateError>;
}

#[allow(async_fn_in_trait)]
pub trait WorkoutRepository {
    async fn read_workouts(&self) -> Result<Vec<Workout>, ReadError>;
    async fn read_workout(&self, id: WorkoutID) -> Result<Workout, ReadError>;
    async fn create_workout(
        &self,
        name: String,
        date: NaiveDate,
        notes: String,
        exercises: Vec<WorkoutExercise>,
    ) -> Result<Workout, CreateError>;
    async fn replace_workout(&self, workout: Workout) -> Result<Workout, UpdateError>;
    async fn delete_workout(&self, id: WorkoutID) -> Result<WorkoutID, DeleteError>;
    async fn read_completed_sets(&self, id: WorkoutID) -> Result<CompletedSets, ReadError>;
    async fn write_completed_sets(
        &self,
        id: WorkoutID,
        completed_sets: CompletedSets,
    ) -> Result<CompletedSets, UpdateError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workout {
    pub id: WorkoutID,
    pub name: String,
    pub date: NaiveDate,
    pub notes: String,
    pub exercises: Vec<WorkoutExercise>,
}

impl Workout {
    /// True if any exercise lacks a name or any set lacks reps or weight.
    #[must_use]
    pub fn has_missing_fields(&self) -> bool {
        self.exercises.iter().any(|e| {
            e.name.trim().is_empty() || e.sets.iter().any(|s| s.reps == 0 || s.weight == 0)
        })
    }

    #[must_use]
    pub fn set_count(&self) -> usize {
        self.exercises.iter().map(|e| e.sets.len()).sum()
    }
}

#[derive(Deref, Display, Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WorkoutID(u32);

impl From<u32> for WorkoutID {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WorkoutExercise {
    pub name: String,
    pub sets: Vec<WorkoutSet>,
}

impl WorkoutExercise {
    #[must_use]
    pub fn max_weight(&self) -> u32 {
        max_weight(&self.sets)
    }

    /// Catalog ID of the exercise with the same name, or the name itself if there is none.
    #[must_use]
    pub fn exercise_id(&self, catalog: &Catalog) -> ExerciseID {
        catalog
            .exercise_by_name(&self.name)
            .map_or_else(|| ExerciseID::from(self.name.as_str()), |e| e.id.clone())
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WorkoutSet {
    pub reps: u32,
    pub weight: u32,
}

impl WorkoutSet {
    /// Parses form input. Leading digits are used, anything else counts as zero.
    #[must_use]
    pub fn parse(reps: &str, weight: &str) -> Self {
        Self {
            reps: parse_number(reps),
            weight: parse_number(weight),
        }
    }
}

impl fmt::Display for WorkoutSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Reps: {}, Weight: {} lbs", self.reps, self.weight)
    }
}

pub(crate) fn max_weight(sets: &[WorkoutSet]) -> u32 {
    sets.iter().map(|s| s.weight).max().unwrap_or(0)
}

/// Leading digits of `value`, or zero if there are none.
#[must_use]
pub fn parse_number(value: &str) -> u32 {
    let trimmed = value.trim_start();
    let end = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    trimmed[..end].parse().unwrap_or(0)
}

/// Calendar week starting on Monday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Week {
    first_day: NaiveDate,
}

impl Week {
    #[must_use]
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            first_day: date - Duration::days(i64::from(date.weekday().num_days_from_monday())),
        }
    }

    #[must_use]
    pub fn previous(self) -> Self {
        Self {
            first_day: self.first_day - Duration::days(7),
        }
    }

    #[must_use]
    pub fn next(self) -> Self {
        Self {
            first_day: self.first_day + Duration::days(7),
        }
    }

    #[must_use]
    pub fn first_day(self) -> NaiveDate {
        self.first_day
    }

    #[must_use]
    pub fn last_day(self) -> NaiveDate {
        self.first_day + Duration::days(6)
    }

    #[must_use]
    pub fn days(self) -> [NaiveDate; 7] {
        let mut days = [self.first_day; 7];
        for (day, date) in days.iter_mut().zip(self.first_day.iter_days()) {
            *day = date;
        }
        days
    }

    #[must_use]
    pub fn contains(self, date: NaiveDate) -> bool {
        self.first_day <= date && date <= self.last_day()
    }
}

impl fmt::Display for Week {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} - {}",
            self.first_day.format("%b %-d"),
            self.last_day().format("%b %-d, %Y")
        )
    }
}

/// Workouts of each day of `week`, in the order of `workouts`.
#[must_use]
pub fn week_grid(workouts: &[Workout], week: Week) -> Vec<(NaiveDate, Vec<&Workout>)> {
    week.days()
        .into_iter()
        .map(|day| (day, workouts.iter().filter(|w| w.date == day).collect()))
        .collect()
}

/// Time without further changes before completed sets are saved.
pub const COMPLETED_SETS_QUIET_PERIOD: Duration = Duration::milliseconds(500);

/// Sets marked as done during a workout, identified by exercise and set index.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CompletedSets(BTreeSet<(usize, usize)>);

impl CompletedSets {
    /// Parses keys of the form `"<exercise>-<set>"`. Malformed keys are ignored.
    pub fn from_keys<'a>(keys: impl IntoIterator<Item = &'a str>) -> Self {
        Self(
            keys.into_iter()
                .filter_map(|key| {
                    let (exercise, set) = key.split_once('-')?;
                    Some((exercise.parse().ok()?, set.parse().ok()?))
                })
                .collect(),
        )
    }

    pub fn keys(&self) -> impl Iterator<Item = String> + '_ {
        self.0
            .iter()
            .map(|(exercise, set)| format!("{exercise}-{set}"))
    }

    /// Returns whether the set is completed afterwards.
    pub fn toggle(&mut self, exercise_idx: usize, set_idx: usize) -> bool {
        if self.0.remove(&(exercise_idx, set_idx)) {
            false
        } else {
            self.0.insert((exercise_idx, set_idx));
            true
        }
    }

    #[must_use]
    pub fn is_completed(&self, exercise_idx: usize, set_idx: usize) -> bool {
        self.0.contains(&(exercise_idx, set_idx))
    }

    /// Percentage of the `set_count` sets of an exercise that are completed.
    #[must_use]
    pub fn progress(&self, exercise_idx: usize, set_count: usize) -> f64 {
        if set_count == 0 {
            return 0.0;
        }
        let completed = self
            .0
            .range((exercise_idx, 0)..(exercise_idx, set_count))
            .count();
        #[allow(clippy::cast_precision_loss)]
        let progress = completed as f64 / set_count as f64 * 100.0;
        progress
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
