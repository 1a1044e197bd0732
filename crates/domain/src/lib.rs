#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod catalog;
pub mod error;
pub mod exercise;
pub mod favorite;
pub mod filter;
pub mod history;
pub mod pagination;
pub mod service;
pub mod session;
pub mod video;
pub mod workout;

pub use catalog::{Catalog, MuscleGroups};
pub use error::{CreateError, DeleteError, ReadError, SessionError, StorageError, UpdateError};
pub use exercise::{
    Category, Equipment, Exercise, ExerciseID, Force, Level, Mechanic, Muscle, Property,
    PropertyError,
};
pub use favorite::{
    Favorite, FavoriteID, FavoriteRepository, FavoriteService, Favorites, Notification,
};
pub use filter::{ExerciseFilter, FilterOptions, Listing, Sort, SortKey, SortOrder, derive};
pub use history::{
    ExerciseHistoryRepository, ExerciseHistoryService, HistoryEntry, max_weight_progression,
    record_workout_history,
};
pub use pagination::{ItemsPerPage, ItemsPerPageError, Page, Pagination};
pub use service::Service;
pub use session::{Session, SessionRepository, SessionService, User, UserID};
pub use video::{VideoID, VideoRepository, VideoService, video_query};
pub use workout::{
    COMPLETED_SETS_QUIET_PERIOD, CompletedSets, Week, Workout, WorkoutExercise, WorkoutID,
    WorkoutRepository, WorkoutService, WorkoutSet, week_grid,
};
