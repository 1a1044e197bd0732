use derive_more::{Deref, Display};

use crate::{DeleteError, FavoriteService, Favorites, ReadError, SessionError};

#[allow(async_fn_in_trait)]
pub trait SessionService {
    async fn get_current_user(&self) -> Result<User, ReadError>;
    async fn login(&self, username: String, password: String) -> Result<User, ReadError>;
    async fn logout(&self) -> Result<(), DeleteError>;
}

#[allow(async_fn_in_trait)]
pub trait SessionRepository {
    async fn read_current_user(&self) -> Result<User, ReadError>;
    async fn login(&self, username: String, password: String) -> Result<User, ReadError>;
    async fn logout(&self) -> Result<(), DeleteError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserID,
    pub username: String,
}

#[derive(Deref, Display, Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserID(u32);

impl From<u32> for UserID {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

/// State shared by all pages: the logged in user and their favorites.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Session {
    user: Option<User>,
    favorites: Favorites,
}

impl Session {
    /// Loads the current user and their favorites.
    ///
    /// A missing session results in the logged out state.
    pub async fn initialize<S>(&mut self, service: &S) -> Result<(), ReadError>
    where
        S: SessionService + FavoriteService,
    {
        match service.get_current_user().await {
            Ok(user) => {
                self.user = Some(user);
                self.favorites.refresh(service).await
            }
            Err(err) if err.is_no_session() => {
                self.invalidate();
                Ok(())
            }
            Err(err) => Err(err),
        }
    }

    pub async fn login<S>(
        &mut self,
        service: &S,
        username: String,
        password: String,
    ) -> Result<(), ReadError>
    where
        S: SessionService + FavoriteService,
    {
        let user = service.login(username, password).await?;
        self.user = Some(user);
        self.favorites.refresh(service).await
    }

    /// Ends the session. The local state is invalidated even if the request fails.
    pub async fn logout(&mut self, service: &impl SessionService) -> Result<(), DeleteError> {
        let result = service.logout().await;
        self.invalidate();
        result
    }

    pub fn invalidate(&mut self) {
        self.user = None;
        self.favorites.clear();
    }

    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    #[must_use]
    pub fn favorites(&self) -> &Favorites {
        &self.favorites
    }

    pub fn favorites_mut(&mut self) -> &mut Favorites {
        &mut self.favorites
    }
}
