use derive_more::{Deref, Display};

use crate::ReadError;

#[allow(async_fn_in_trait)]
pub trait VideoService {
    async fn get_video(&self, query: String) -> Result<VideoID, ReadError>;
}

#[allow(async_fn_in_trait)]
pub trait VideoRepository {
    async fn read_video(&self, query: String) -> Result<VideoID, ReadError>;
}

#[derive(Deref, Display, Debug, Clone, PartialEq, Eq, Hash)]
pub struct VideoID(String);

impl VideoID {
    #[must_use]
    pub fn embed_url(&self) -> String {
        format!("https://www.youtube.com/embed/{}", self.0)
    }
}

impl From<String> for VideoID {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for VideoID {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Search query for the instruction video of an exercise.
#[must_use]
pub fn video_query(exercise_name: &str) -> String {
    format!("{} exercise tutorial", exercise_name.trim())
}
