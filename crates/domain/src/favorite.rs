use std::fmt;

use derive_more::{Deref, Display};
use log::{debug, warn};

use crate::{
    Catalog, CreateError, DeleteError, Exercise, ExerciseID, ReadError, SessionError,
};

#[allow(async_fn_in_trait)]
pub trait FavoriteService {
    async fn get_favorites(&self) -> Result<Vec<Favorite>, ReadError>;
    async fn create_favorite(
        &self,
        exercise_id: ExerciseID,
        exercise_name: String,
    ) -> Result<Favorite, CreateError>;
    async fn delete_favorite(&self, id: FavoriteID) -> Result<FavoriteID, DeleteError>;
}

#[allow(async_fn_in_trait)]
pub trait FavoriteRepository {
    async fn read_favorites(&self) -> Result<Vec<Favorite>, ReadError>;
    async fn create_favorite(
        &self,
        exercise_id: ExerciseID,
        exercise_name: String,
    ) -> Result<Favorite, CreateError>;
    async fn delete_favorite(&self, id: FavoriteID) -> Result<FavoriteID, DeleteError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Favorite {
    pub id: FavoriteID,
    pub exercise_id: ExerciseID,
    pub exercise_name: String,
}

#[derive(Deref, Display, Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FavoriteID(u32);

impl From<u32> for FavoriteID {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

/// Locally cached favorites of the current user.
///
/// The cache only ever reflects confirmed server state.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Favorites {
    favorites: Vec<Favorite>,
}

impl Favorites {
    #[must_use]
    pub fn new(favorites: Vec<Favorite>) -> Self {
        Self { favorites }
    }

    /// Replaces the cache with the server's list.
    ///
    /// Without a session the cache is cleared and no error is returned.
    pub async fn refresh(&mut self, service: &impl FavoriteService) -> Result<(), ReadError> {
        match service.get_favorites().await {
            Ok(favorites) => {
                self.favorites = favorites;
                Ok(())
            }
            Err(err) if err.is_no_session() => {
                debug!("clearing favorites: {err}");
                self.clear();
                Ok(())
            }
            Err(err) => Err(err),
        }
    }

    pub async fn toggle(
        &mut self,
        service: &impl FavoriteService,
        exercise: &Exercise,
    ) -> Notification {
        match self.id(&exercise.id) {
            Some(id) => match service.delete_favorite(id).await {
                Ok(_) | Err(DeleteError::NotFound) => {
                    self.remove(&exercise.id);
                    Notification::FavoriteRemoved(exercise.name.clone())
                }
                Err(err) if err.is_no_session() => {
                    self.remove(&exercise.id);
                    Notification::LoginRequired
                }
                Err(err) => Notification::Failed(err.to_string()),
            },
            None => match service
                .create_favorite(exercise.id.clone(), exercise.name.clone())
                .await
            {
                Ok(favorite) => {
                    if favorite.exercise_id != exercise.id {
                        warn!(
                            "favorite {} refers to \"{}\" instead of \"{}\"",
                            favorite.id, favorite.exercise_id, exercise.id
                        );
                    }
                    self.favorites.push(Favorite {
                        exercise_id: exercise.id.clone(),
                        ..favorite
                    });
                    Notification::FavoriteAdded(exercise.name.clone())
                }
                Err(err) if err.is_no_session() => Notification::LoginRequired,
                Err(err) => Notification::Failed(err.to_string()),
            },
        }
    }

    #[must_use]
    pub fn is_favorite(&self, exercise_id: &ExerciseID) -> bool {
        self.id(exercise_id).is_some()
    }

    #[must_use]
    pub fn id(&self, exercise_id: &ExerciseID) -> Option<FavoriteID> {
        self.favorites
            .iter()
            .find(|f| f.exercise_id == *exercise_id)
            .map(|f| f.id)
    }

    #[must_use]
    pub fn favorites(&self) -> &[Favorite] {
        &self.favorites
    }

    /// Catalog exercises of all favorites, in the order they were added.
    ///
    /// Favorites of exercises missing in the catalog are skipped.
    #[must_use]
    pub fn favorite_exercises<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Exercise> {
        self.favorites
            .iter()
            .filter_map(|f| catalog.exercise(&f.exercise_id))
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.favorites.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.favorites.is_empty()
    }

    pub fn clear(&mut self) {
        self.favorites.clear();
    }

    fn remove(&mut self, exercise_id: &ExerciseID) {
        self.favorites.retain(|f| f.exercise_id != *exercise_id);
    }
}

/// Transient message shown after a favorite was toggled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    FavoriteAdded(String),
    FavoriteRemoved(String),
    LoginRequired,
    Failed(String),
}

impl Notification {
    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self, Notification::LoginRequired | Notification::Failed(_))
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Notification::FavoriteAdded(name) => write!(f, "Added {name} to favorites"),
            Notification::FavoriteRemoved(name) => write!(f, "Removed {name} from favorites"),
            Notification::LoginRequired => write!(f, "Please log in to save favorites"),
            Notification::Failed(message) => write!(f, "Failed to update favorites: {message}"),
        }
    }
}
