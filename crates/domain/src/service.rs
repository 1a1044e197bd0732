use chrono::NaiveDate;
use log::{debug, error};

use crate::{
    CompletedSets, CreateError, DeleteError, ExerciseHistoryRepository, ExerciseHistoryService,
    ExerciseID, Favorite, FavoriteID, FavoriteRepository, FavoriteService, HistoryEntry,
    ReadError, SessionRepository, SessionService, UpdateError, User, VideoID, VideoRepository,
    VideoService, Workout, WorkoutExercise, WorkoutID, WorkoutRepository, WorkoutService,
    WorkoutSet,
};

pub struct Service<R> {
    repository: R,
}

impl<R> Service<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    #[must_use]
    pub fn repository(&self) -> &R {
        &self.repository
    }
}

macro_rules! log_on_error {
    ($func: expr, $error: ident, $action: literal, $entity: literal) => {{
        let result = $func.await;
        match result {
            Ok(_) => {}
            Err(ref err) => match err {
                $error::Storage(
                    crate::StorageError::NoConnection | crate::StorageError::NoSession,
                ) => {
                    debug!("failed to {} {}: {err}", $action, $entity);
                }
                _ => {
                    error!("failed to {} {}: {err}", $action, $entity);
                }
            },
        }
        result
    }};
}

impl<R: SessionRepository> SessionService for Service<R> {
    async fn get_current_user(&self) -> Result<User, ReadError> {
        log_on_error!(
            self.repository.read_current_user(),
            ReadError,
            "get",
            "current user"
        )
    }

    async fn login(&self, username: String, password: String) -> Result<User, ReadError> {
        log_on_error!(
            self.repository.login(username, password),
            ReadError,
            "log",
            "in"
        )
    }

    async fn logout(&self) -> Result<(), DeleteError> {
        log_on_error!(self.repository.logout(), DeleteError, "log", "out")
    }
}

impl<R: FavoriteRepository> FavoriteService for Service<R> {
    async fn get_favorites(&self) -> Result<Vec<Favorite>, ReadError> {
        log_on_error!(
            self.repository.read_favorites(),
            ReadError,
            "get",
            "favorites"
        )
    }

    async fn create_favorite(
        &self,
        exercise_id: ExerciseID,
        exercise_name: String,
    ) -> Result<Favorite, CreateError> {
        log_on_error!(
            self.repository.create_favorite(exercise_id, exercise_name),
            CreateError,
            "create",
            "favorite"
        )
    }

    async fn delete_favorite(&self, id: FavoriteID) -> Result<FavoriteID, DeleteError> {
        log_on_error!(
            self.repository.delete_favorite(id),
            DeleteError,
            "delete",
            "favorite"
        )
    }
}

impl<R: WorkoutRepository> WorkoutService for Service<R> {
    async fn get_workouts(&self) -> Result<Vec<Workout>, ReadError> {
        log_on_error!(
            self.repository.read_workouts(),
            ReadError,
            "get",
            "workouts"
        )
    }

    async fn get_workout(&self, id: WorkoutID) -> Result<Workout, ReadError> {
        log_on_error!(
            self.repository.read_workout(id),
            ReadError,
            "get",
            "workout"
        )
    }

    async fn create_workout(
        &self,
        name: String,
        date: NaiveDate,
        notes: String,
        exercises: Vec<WorkoutExercise>,
    ) -> Result<Workout, CreateError> {
        log_on_error!(
            self.repository.create_workout(name, date, notes, exercises),
            CreateError,
            "create",
            "workout"
        )
    }

    async fn replace_workout(&self, workout: Workout) -> Result<Workout, UpdateError> {
        log_on_error!(
            self.repository.replace_workout(workout),
            UpdateError,
            "replace",
            "workout"
        )
    }

    async fn delete_workout(&self, id: WorkoutID) -> Result<WorkoutID, DeleteError> {
        log_on_error!(
            self.repository.delete_workout(id),
            DeleteError,
            "delete",
            "workout"
        )
    }

    async fn get_completed_sets(&self, id: WorkoutID) -> Result<CompletedSets, ReadError> {
        log_on_error!(
            self.repository.read_completed_sets(id),
            ReadError,
            "get",
            "completed sets"
        )
    }

    async fn replace_completed_sets(
        &self,
        id: WorkoutID,
        completed_sets: CompletedSets,
    ) -> Result<CompletedSets, UpdateError> {
        log_on_error!(
            self.repository.write_completed_sets(id, completed_sets),
            UpdateError,
            "replace",
            "completed sets"
        )
    }
}

impl<R: ExerciseHistoryRepository> ExerciseHistoryService for Service<R> {
    async fn get_exercise_history(
        &self,
        exercise_id: ExerciseID,
    ) -> Result<Vec<HistoryEntry>, ReadError> {
        log_on_error!(
            self.repository.read_exercise_history(exercise_id),
            ReadError,
            "get",
            "exercise history"
        )
    }

    async fn create_exercise_history(
        &self,
        exercise_id: ExerciseID,
        date: NaiveDate,
        sets: Vec<WorkoutSet>,
    ) -> Result<HistoryEntry, CreateError> {
        log_on_error!(
            self.repository
                .create_exercise_history(exercise_id, date, sets),
            CreateError,
            "create",
            "exercise history"
        )
    }
}

impl<R: VideoRepository> VideoService for Service<R> {
    async fn get_video(&self, query: String) -> Result<VideoID, ReadError> {
        log_on_error!(self.repository.read_video(query), ReadError, "get", "video")
    }
}
