#[derive(thiserror::Error, Debug)]
pub enum ReadError {
    #[error("not found")]
    NotFound,
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}

#[derive(thiserror::Error, Debug)]
pub enum CreateError {
    #[error("conflict")]
    Conflict,
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}

impl From<UpdateError> for CreateError {
    fn from(value: UpdateError) -> Self {
        match value {
            UpdateError::Conflict => CreateError::Conflict,
            UpdateError::Storage(storage) => CreateError::Storage(storage),
            UpdateError::Other(other) => CreateError::Other(other),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum UpdateError {
    #[error("conflict")]
    Conflict,
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}

#[derive(thiserror::Error, Debug)]
pub enum DeleteError {
    #[error("not found")]
    NotFound,
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}

#[derive(thiserror::Error, Debug)]
pub enum StorageError {
    #[error("no connection")]
    NoConnection,
    #[error("no session")]
    NoSession,
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}

/// Errors that indicate a missing login rather than a failure.
pub trait SessionError {
    fn is_no_session(&self) -> bool;
}

macro_rules! impl_session_error {
    ($($error: ident),*) => {
        $(
            impl SessionError for $error {
                fn is_no_session(&self) -> bool {
                    matches!(self, $error::Storage(StorageError::NoSession))
                }
            }
        )*
    };
}

impl_session_error!(ReadError, CreateError, UpdateError, DeleteError);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_error_from_update_error() {
        assert!(matches!(
            CreateError::from(UpdateError::Conflict),
            CreateError::Conflict
        ));
        assert!(matches!(
            CreateError::from(UpdateError::Storage(StorageError::NoSession)),
            CreateError::Storage(StorageError::NoSession)
        ));
        assert!(matches!(
            CreateError::from(UpdateError::Other("foo".into())),
            CreateError::Other(error) if error.to_string() == "foo"
        ));
    }

    #[test]
    fn test_is_no_session() {
        assert!(ReadError::Storage(StorageError::NoSession).is_no_session());
        assert!(!ReadError::Storage(StorageError::NoConnection).is_no_session());
        assert!(!ReadError::NotFound.is_no_session());
        assert!(CreateError::Storage(StorageError::NoSession).is_no_session());
        assert!(!CreateError::Conflict.is_no_session());
        assert!(DeleteError::Storage(StorageError::NoSession).is_no_session());
        assert!(!UpdateError::Other("foo".into()).is_no_session());
    }
}
