use std::{cell::RefCell, collections::BTreeMap};

use chrono::NaiveDate;
use gloo_net::http::{Method, Request, RequestBuilder, Response};
use gymatlas_domain as domain;
use log::error;
use serde::{Deserialize, Deserializer, Serialize, de::DeserializeOwned};
use serde_json::json;
use web_sys::{AbortController, AbortSignal, RequestCredentials};

#[allow(async_fn_in_trait)]
pub trait SendRequest {
    async fn send_request(&self, request: Request) -> Result<Response, gloo_net::Error>;

    fn abort_signal(&self) -> Option<AbortSignal> {
        None
    }
}

/// Sends requests with the browser's fetch API.
///
/// All requests share one abort signal. Dropping the sender aborts every request in flight.
#[derive(Default)]
pub struct GlooNetSendRequest {
    abort_controller: RefCell<Option<AbortController>>,
}

impl GlooNetSendRequest {
    /// Aborts all requests in flight. Subsequent requests use a new signal.
    pub fn abort(&self) {
        if let Some(abort_controller) = self.abort_controller.borrow_mut().take() {
            abort_controller.abort();
        }
    }
}

impl Drop for GlooNetSendRequest {
    fn drop(&mut self) {
        self.abort();
    }
}

impl SendRequest for GlooNetSendRequest {
    async fn send_request(&self, request: Request) -> Result<Response, gloo_net::Error> {
        request.send().await
    }

    fn abort_signal(&self) -> Option<AbortSignal> {
        let mut abort_controller = self.abort_controller.borrow_mut();
        if abort_controller.is_none() {
            match AbortController::new() {
                Ok(controller) => *abort_controller = Some(controller),
                Err(err) => error!("failed to create abort controller: {err:?}"),
            }
        }
        abort_controller.as_ref().map(AbortController::signal)
    }
}

pub struct REST<S: SendRequest> {
    pub base_url: String,
    pub sender: S,
}

impl REST<GlooNetSendRequest> {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            sender: GlooNetSendRequest::default(),
        }
    }
}

impl<S: SendRequest> REST<S> {
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        RequestBuilder::new(&format!("{}/{path}", self.base_url.trim_end_matches('/')))
            .method(method)
            .credentials(RequestCredentials::Include)
            .abort_signal(self.sender.abort_signal().as_ref())
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        request: Result<Request, gloo_net::Error>,
    ) -> Result<T, FetchError> {
        let response = self.send(request).await?;
        response
            .json::<T>()
            .await
            .map_err(|err| FetchError::Deserialization(err.to_string()))
    }

    async fn fetch_no_content(
        &self,
        request: Result<Request, gloo_net::Error>,
    ) -> Result<(), FetchError> {
        self.send(request).await.map(|_| ())
    }

    async fn send(&self, request: Result<Request, gloo_net::Error>) -> Result<Response, FetchError> {
        let request = request.map_err(|err| FetchError::Request(err.to_string()))?;
        let response = self
            .sender
            .send_request(request)
            .await
            .map_err(|_| FetchError::NoConnection)?;
        check_status(response.status(), &response.status_text())?;
        Ok(response)
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum FetchError {
    #[error("no connection")]
    NoConnection,
    #[error("unauthorized")]
    Unauthorized,
    #[error("not found")]
    NotFound,
    #[error("conflict")]
    Conflict,
    #[error("{0}")]
    Status(String),
    #[error("invalid request: {0}")]
    Request(String),
    #[error("deserialization failed: {0}")]
    Deserialization(String),
}

pub fn check_status(status: u16, status_text: &str) -> Result<(), FetchError> {
    match status {
        200..=299 => Ok(()),
        401 => Err(FetchError::Unauthorized),
        404 => Err(FetchError::NotFound),
        409 => Err(FetchError::Conflict),
        _ => Err(FetchError::Status(
            format!("{status} {status_text}").trim_end().to_string(),
        )),
    }
}

impl From<FetchError> for domain::StorageError {
    fn from(value: FetchError) -> Self {
        match value {
            FetchError::NoConnection => domain::StorageError::NoConnection,
            FetchError::Unauthorized => domain::StorageError::NoSession,
            err => domain::StorageError::Other(Box::new(err)),
        }
    }
}

impl From<FetchError> for domain::ReadError {
    fn from(value: FetchError) -> Self {
        match value {
            FetchError::NotFound => domain::ReadError::NotFound,
            err => domain::ReadError::Storage(err.into()),
        }
    }
}

impl From<FetchError> for domain::CreateError {
    fn from(value: FetchError) -> Self {
        match value {
            FetchError::Conflict => domain::CreateError::Conflict,
            err => domain::CreateError::Storage(err.into()),
        }
    }
}

impl From<FetchError> for domain::UpdateError {
    fn from(value: FetchError) -> Self {
        match value {
            FetchError::Conflict => domain::UpdateError::Conflict,
            err => domain::UpdateError::Storage(err.into()),
        }
    }
}

impl From<FetchError> for domain::DeleteError {
    fn from(value: FetchError) -> Self {
        match value {
            FetchError::NotFound => domain::DeleteError::NotFound,
            err => domain::DeleteError::Storage(err.into()),
        }
    }
}

fn encode(segment: &str) -> String {
    js_sys::encode_uri_component(segment).into()
}

impl<S: SendRequest> domain::SessionRepository for REST<S> {
    async fn read_current_user(&self) -> Result<domain::User, domain::ReadError> {
        Ok(self
            .fetch::<User>(self.request(Method::GET, "api/current_user").build())
            .await?
            .into())
    }

    async fn login(
        &self,
        username: String,
        password: String,
    ) -> Result<domain::User, domain::ReadError> {
        Ok(self
            .fetch::<User>(
                self.request(Method::POST, "api/auth/login")
                    .json(&json!({ "username": username, "password": password })),
            )
            .await?
            .into())
    }

    async fn logout(&self) -> Result<(), domain::DeleteError> {
        Ok(self
            .fetch_no_content(self.request(Method::POST, "api/auth/logout").build())
            .await?)
    }
}

impl<S: SendRequest> domain::FavoriteRepository for REST<S> {
    async fn read_favorites(&self) -> Result<Vec<domain::Favorite>, domain::ReadError> {
        Ok(self
            .fetch::<Vec<Favorite>>(self.request(Method::GET, "api/favorites").build())
            .await?
            .into_iter()
            .map(domain::Favorite::from)
            .collect())
    }

    async fn create_favorite(
        &self,
        exercise_id: domain::ExerciseID,
        exercise_name: String,
    ) -> Result<domain::Favorite, domain::CreateError> {
        Ok(self
            .fetch::<Favorite>(self.request(Method::POST, "api/favorites").json(&json!({
                "exercise_id": exercise_id.as_str(),
                "exercise_name": exercise_name,
            })))
            .await?
            .into())
    }

    async fn delete_favorite(
        &self,
        id: domain::FavoriteID,
    ) -> Result<domain::FavoriteID, domain::DeleteError> {
        self.fetch_no_content(
            self.request(Method::DELETE, &format!("api/favorites/{id}"))
                .build(),
        )
        .await?;
        Ok(id)
    }
}

impl<S: SendRequest> domain::WorkoutRepository for REST<S> {
    async fn read_workouts(&self) -> Result<Vec<domain::Workout>, domain::ReadError> {
        Ok(self
            .fetch::<Vec<Workout>>(self.request(Method::GET, "api/workouts").build())
            .await?
            .into_iter()
            .map(domain::Workout::from)
            .collect())
    }

    async fn read_workout(
        &self,
        id: domain::WorkoutID,
    ) -> Result<domain::Workout, domain::ReadError> {
        Ok(self
            .fetch::<Workout>(
                self.request(Method::GET, &format!("api/workouts/{id}"))
                    .build(),
            )
            .await?
            .into())
    }

    async fn create_workout(
        &self,
        name: String,
        date: NaiveDate,
        notes: String,
        exercises: Vec<domain::WorkoutExercise>,
    ) -> Result<domain::Workout, domain::CreateError> {
        let exercises = exercises
            .into_iter()
            .map(WorkoutExercise::from)
            .collect::<Vec<_>>();
        Ok(self
            .fetch::<Workout>(self.request(Method::POST, "api/workouts").json(&json!({
                "name": name,
                "date": date,
                "notes": notes,
                "exercises": exercises,
            })))
            .await?
            .into())
    }

    async fn replace_workout(
        &self,
        workout: domain::Workout,
    ) -> Result<domain::Workout, domain::UpdateError> {
        Ok(self
            .fetch::<Workout>(
                self.request(Method::PUT, &format!("api/workouts/{}", workout.id))
                    .json(&Workout::from(workout)),
            )
            .await?
            .into())
    }

    async fn delete_workout(
        &self,
        id: domain::WorkoutID,
    ) -> Result<domain::WorkoutID, domain::DeleteError> {
        self.fetch_no_content(
            self.request(Method::DELETE, &format!("api/workouts/{id}"))
                .build(),
        )
        .await?;
        Ok(id)
    }

    async fn read_completed_sets(
        &self,
        id: domain::WorkoutID,
    ) -> Result<domain::CompletedSets, domain::ReadError> {
        Ok(self
            .fetch::<CompletedSets>(
                self.request(Method::GET, &format!("api/workouts/{id}/completed_sets"))
                    .build(),
            )
            .await?
            .into())
    }

    async fn write_completed_sets(
        &self,
        id: domain::WorkoutID,
        completed_sets: domain::CompletedSets,
    ) -> Result<domain::CompletedSets, domain::UpdateError> {
        self.fetch_no_content(
            self.request(Method::POST, &format!("api/workouts/{id}/completed_sets"))
                .json(&CompletedSets::from(&completed_sets)),
        )
        .await?;
        Ok(completed_sets)
    }
}

impl<S: SendRequest> domain::ExerciseHistoryRepository for REST<S> {
    async fn read_exercise_history(
        &self,
        exercise_id: domain::ExerciseID,
    ) -> Result<Vec<domain::HistoryEntry>, domain::ReadError> {
        Ok(self
            .fetch::<Vec<HistoryEntry>>(
                self.request(
                    Method::GET,
                    &format!("api/exercise_history/{}", encode(&exercise_id)),
                )
                .build(),
            )
            .await?
            .into_iter()
            .map(domain::HistoryEntry::from)
            .collect())
    }

    async fn create_exercise_history(
        &self,
        exercise_id: domain::ExerciseID,
        date: NaiveDate,
        sets: Vec<domain::WorkoutSet>,
    ) -> Result<domain::HistoryEntry, domain::CreateError> {
        let entry = domain::HistoryEntry { date, sets };
        self.fetch_no_content(
            self.request(
                Method::POST,
                &format!("api/exercise_history/{}", encode(&exercise_id)),
            )
            .json(&HistoryEntry::from(entry.clone())),
        )
        .await?;
        Ok(entry)
    }
}

impl<S: SendRequest> domain::VideoRepository for REST<S> {
    async fn read_video(&self, query: String) -> Result<domain::VideoID, domain::ReadError> {
        Ok(self
            .fetch::<Video>(
                self.request(Method::GET, "api/youtube/search")
                    .query([("query", query.as_str())])
                    .build(),
            )
            .await?
            .video_id
            .into())
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: u32,
    pub username: String,
}

impl From<User> for domain::User {
    fn from(value: User) -> Self {
        Self {
            id: value.id.into(),
            username: value.username,
        }
    }
}

impl From<domain::User> for User {
    fn from(value: domain::User) -> Self {
        Self {
            id: *value.id,
            username: value.username,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Favorite {
    pub id: u32,
    pub exercise_id: String,
    pub exercise_name: String,
}

impl From<Favorite> for domain::Favorite {
    fn from(value: Favorite) -> Self {
        Self {
            id: value.id.into(),
            exercise_id: value.exercise_id.into(),
            exercise_name: value.exercise_name,
        }
    }
}

impl From<domain::Favorite> for Favorite {
    fn from(value: domain::Favorite) -> Self {
        Self {
            id: *value.id,
            exercise_id: value.exercise_id.to_string(),
            exercise_name: value.exercise_name,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Workout {
    pub id: u32,
    pub name: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub exercises: Vec<WorkoutExercise>,
}

impl From<Workout> for domain::Workout {
    fn from(value: Workout) -> Self {
        Self {
            id: value.id.into(),
            name: value.name,
            date: value.date,
            notes: value.notes,
            exercises: value
                .exercises
                .into_iter()
                .map(domain::WorkoutExercise::from)
                .collect(),
        }
    }
}

impl From<domain::Workout> for Workout {
    fn from(value: domain::Workout) -> Self {
        Self {
            id: *value.id,
            name: value.name,
            date: value.date,
            notes: value.notes,
            exercises: value
                .exercises
                .into_iter()
                .map(WorkoutExercise::from)
                .collect(),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct WorkoutExercise {
    pub name: String,
    #[serde(default)]
    pub sets: Vec<WorkoutSet>,
}

impl From<WorkoutExercise> for domain::WorkoutExercise {
    fn from(value: WorkoutExercise) -> Self {
        Self {
            name: value.name,
            sets: value.sets.into_iter().map(domain::WorkoutSet::from).collect(),
        }
    }
}

impl From<domain::WorkoutExercise> for WorkoutExercise {
    fn from(value: domain::WorkoutExercise) -> Self {
        Self {
            name: value.name,
            sets: value.sets.into_iter().map(WorkoutSet::from).collect(),
        }
    }
}

/// Reps and weight are accepted as numbers or as form input strings.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkoutSet {
    #[serde(deserialize_with = "deserialize_number")]
    pub reps: u32,
    #[serde(deserialize_with = "deserialize_number")]
    pub weight: u32,
}

impl From<WorkoutSet> for domain::WorkoutSet {
    fn from(value: WorkoutSet) -> Self {
        Self {
            reps: value.reps,
            weight: value.weight,
        }
    }
}

impl From<domain::WorkoutSet> for WorkoutSet {
    fn from(value: domain::WorkoutSet) -> Self {
        Self {
            reps: value.reps,
            weight: value.weight,
        }
    }
}

fn deserialize_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Number {
        Integer(u32),
        Float(f64),
        Text(String),
        Null(()),
    }

    Ok(match Number::deserialize(deserializer)? {
        Number::Integer(value) => value,
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        Number::Float(value) => value.clamp(0.0, f64::from(u32::MAX)) as u32,
        Number::Text(value) => domain::workout::parse_number(&value),
        Number::Null(()) => 0,
    })
}

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct CompletedSets {
    #[serde(rename = "completedSets", default)]
    pub completed_sets: BTreeMap<String, bool>,
}

impl From<CompletedSets> for domain::CompletedSets {
    fn from(value: CompletedSets) -> Self {
        domain::CompletedSets::from_keys(
            value
                .completed_sets
                .iter()
                .filter(|(_, completed)| **completed)
                .map(|(key, _)| key.as_str()),
        )
    }
}

impl From<&domain::CompletedSets> for CompletedSets {
    fn from(value: &domain::CompletedSets) -> Self {
        Self {
            completed_sets: value.keys().map(|key| (key, true)).collect(),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub date: NaiveDate,
    #[serde(default)]
    pub sets: Vec<WorkoutSet>,
}

impl From<HistoryEntry> for domain::HistoryEntry {
    fn from(value: HistoryEntry) -> Self {
        Self {
            date: value.date,
            sets: value.sets.into_iter().map(domain::WorkoutSet::from).collect(),
        }
    }
}

impl From<domain::HistoryEntry> for HistoryEntry {
    fn from(value: domain::HistoryEntry) -> Self {
        Self {
            date: value.date,
            sets: value.sets.into_iter().map(WorkoutSet::from).collect(),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Video {
    #[serde(rename = "videoId")]
    pub video_id: String,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    use super::*;
    use crate::tests::data::{COMPLETED_SETS, FAVORITE, USER, WORKOUT};

    #[rstest]
    #[case(200, "OK", Ok(()))]
    #[case(201, "Created", Ok(()))]
    #[case(204, "No Content", Ok(()))]
    #[case(401, "Unauthorized", Err(FetchError::Unauthorized))]
    #[case(404, "Not Found", Err(FetchError::NotFound))]
    #[case(409, "Conflict", Err(FetchError::Conflict))]
    #[case(
        500,
        "Internal Server Error",
        Err(FetchError::Status("500 Internal Server Error".to_string()))
    )]
    #[case(400, "", Err(FetchError::Status("400".to_string())))]
    fn test_check_status(
        #[case] status: u16,
        #[case] status_text: &str,
        #[case] expected: Result<(), FetchError>,
    ) {
        assert_eq!(check_status(status, status_text), expected);
    }

    #[test]
    fn test_fetch_error_into_read_error() {
        assert!(matches!(
            domain::ReadError::from(FetchError::NoConnection),
            domain::ReadError::Storage(domain::StorageError::NoConnection)
        ));
        assert!(matches!(
            domain::ReadError::from(FetchError::Unauthorized),
            domain::ReadError::Storage(domain::StorageError::NoSession)
        ));
        assert!(matches!(
            domain::ReadError::from(FetchError::NotFound),
            domain::ReadError::NotFound
        ));
        assert!(matches!(
            domain::ReadError::from(FetchError::Conflict),
            domain::ReadError::Storage(domain::StorageError::Other(_))
        ));
    }

    #[test]
    fn test_fetch_error_into_write_errors() {
        assert!(matches!(
            domain::CreateError::from(FetchError::Conflict),
            domain::CreateError::Conflict
        ));
        assert!(matches!(
            domain::CreateError::from(FetchError::Unauthorized),
            domain::CreateError::Storage(domain::StorageError::NoSession)
        ));
        assert!(matches!(
            domain::UpdateError::from(FetchError::Conflict),
            domain::UpdateError::Conflict
        ));
        assert!(matches!(
            domain::DeleteError::from(FetchError::NotFound),
            domain::DeleteError::NotFound
        ));
        assert!(matches!(
            domain::DeleteError::from(FetchError::Status("500".to_string())),
            domain::DeleteError::Storage(domain::StorageError::Other(err)) if err.to_string() == "500"
        ));
    }

    #[test]
    fn test_user_from_json() {
        let user: User = serde_json::from_value(json!({ "id": 1, "username": "alice" })).unwrap();

        assert_eq!(domain::User::from(user), USER.clone());
    }

    #[test]
    fn test_favorite_from_json() {
        let favorite: Favorite = serde_json::from_value(json!({
            "id": 3,
            "exercise_id": "Barbell_Bench_Press",
            "exercise_name": "Bench Press"
        }))
        .unwrap();

        assert_eq!(domain::Favorite::from(favorite), FAVORITE.clone());
    }

    #[test]
    fn test_workout_from_json() {
        let workout: Workout = serde_json::from_value(json!({
            "id": 5,
            "name": "Push Day",
            "date": "2026-10-14",
            "notes": "Felt strong",
            "exercises": [
                {
                    "name": "Bench Press",
                    "sets": [
                        { "reps": 10, "weight": 135 },
                        { "reps": "8", "weight": "155" }
                    ]
                },
                {
                    "name": "Pull Up",
                    "sets": [{ "reps": "12", "weight": "" }]
                }
            ]
        }))
        .unwrap();

        assert_eq!(domain::Workout::from(workout), WORKOUT.clone());
    }

    #[rstest]
    #[case(json!(12), 12)]
    #[case(json!(12.7), 12)]
    #[case(json!(-3), 0)]
    #[case(json!("45 lbs"), 45)]
    #[case(json!("abc"), 0)]
    #[case(json!(null), 0)]
    fn test_workout_set_number_formats(#[case] value: serde_json::Value, #[case] expected: u32) {
        let set: WorkoutSet =
            serde_json::from_value(json!({ "reps": value, "weight": 1 })).unwrap();

        assert_eq!(set.reps, expected);
    }

    #[test]
    fn test_completed_sets_json() {
        let completed_sets: CompletedSets = serde_json::from_value(json!({
            "completedSets": { "0-0": true, "0-1": false, "1-0": true }
        }))
        .unwrap();

        assert_eq!(
            domain::CompletedSets::from(completed_sets),
            COMPLETED_SETS.clone()
        );
        assert_eq!(
            serde_json::to_value(CompletedSets::from(&*COMPLETED_SETS)).unwrap(),
            json!({ "completedSets": { "0-0": true, "1-0": true } })
        );
        assert_eq!(
            domain::CompletedSets::from(serde_json::from_value::<CompletedSets>(json!({})).unwrap()),
            domain::CompletedSets::default()
        );
    }

    #[test]
    fn test_video_from_json() {
        let video: Video = serde_json::from_value(json!({ "videoId": "abc123" })).unwrap();

        assert_eq!(
            domain::VideoID::from(video.video_id),
            domain::VideoID::from("abc123")
        );
    }

    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    mod wasm {
        use std::cell::RefCell;

        use gymatlas_domain::{
            ExerciseHistoryRepository, FavoriteRepository, SessionRepository, VideoRepository,
            WorkoutRepository,
        };
        use pretty_assertions::assert_eq;
        use wasm_bindgen_test::wasm_bindgen_test;

        use super::*;

        #[wasm_bindgen_test]
        async fn test_read_current_user() {
            let rest = rest_with_response(Some(
                Response::builder()
                    .status(200)
                    .json(&User::from(USER.clone())),
            ));

            assert_eq!(rest.read_current_user().await.unwrap(), USER.clone());
            assert_eq!(
                rest.sender.url(),
                Some("http://127.0.0.1:5000/api/current_user".to_string())
            );
        }

        #[wasm_bindgen_test]
        async fn test_read_current_user_unauthorized() {
            let rest = rest_with_response(Some(
                Response::builder().status(401).body::<Option<&str>>(None),
            ));

            assert!(matches!(
                rest.read_current_user().await,
                Err(domain::ReadError::Storage(domain::StorageError::NoSession))
            ));
        }

        #[wasm_bindgen_test]
        async fn test_read_current_user_no_connection() {
            assert!(matches!(
                rest_with_response(None).read_current_user().await,
                Err(domain::ReadError::Storage(
                    domain::StorageError::NoConnection
                ))
            ));
        }

        #[wasm_bindgen_test]
        async fn test_logout() {
            let rest = rest_with_response(Some(
                Response::builder().status(200).body::<Option<&str>>(None),
            ));

            rest.logout().await.unwrap();

            assert_eq!(rest.sender.method(), Some(Method::POST));
        }

        #[wasm_bindgen_test]
        async fn test_read_favorites() {
            let rest = rest_with_response(Some(
                Response::builder()
                    .status(200)
                    .json(&vec![Favorite::from(FAVORITE.clone())]),
            ));

            assert_eq!(rest.read_favorites().await.unwrap(), vec![FAVORITE.clone()]);
        }

        #[wasm_bindgen_test]
        async fn test_create_favorite_unauthorized() {
            let rest = rest_with_response(Some(
                Response::builder().status(401).body::<Option<&str>>(None),
            ));

            assert!(matches!(
                rest.create_favorite(FAVORITE.exercise_id.clone(), FAVORITE.exercise_name.clone())
                    .await,
                Err(domain::CreateError::Storage(domain::StorageError::NoSession))
            ));
        }

        #[wasm_bindgen_test]
        async fn test_delete_favorite() {
            let rest = rest_with_response(Some(
                Response::builder().status(200).body::<Option<&str>>(None),
            ));

            assert_eq!(rest.delete_favorite(FAVORITE.id).await.unwrap(), FAVORITE.id);
            assert_eq!(
                rest.sender.url(),
                Some("http://127.0.0.1:5000/api/favorites/3".to_string())
            );
            assert_eq!(rest.sender.method(), Some(Method::DELETE));
        }

        #[wasm_bindgen_test]
        async fn test_delete_favorite_not_found() {
            let rest = rest_with_response(Some(
                Response::builder().status(404).body::<Option<&str>>(None),
            ));

            assert!(matches!(
                rest.delete_favorite(FAVORITE.id).await,
                Err(domain::DeleteError::NotFound)
            ));
        }

        #[wasm_bindgen_test]
        async fn test_read_workout() {
            let rest = rest_with_response(Some(
                Response::builder()
                    .status(200)
                    .json(&Workout::from(WORKOUT.clone())),
            ));

            assert_eq!(rest.read_workout(WORKOUT.id).await.unwrap(), WORKOUT.clone());
        }

        #[wasm_bindgen_test]
        async fn test_write_completed_sets() {
            let rest = rest_with_response(Some(
                Response::builder().status(200).body::<Option<&str>>(None),
            ));

            assert_eq!(
                rest.write_completed_sets(WORKOUT.id, COMPLETED_SETS.clone())
                    .await
                    .unwrap(),
                COMPLETED_SETS.clone()
            );
            assert_eq!(
                rest.sender.url(),
                Some("http://127.0.0.1:5000/api/workouts/5/completed_sets".to_string())
            );
        }

        #[wasm_bindgen_test]
        async fn test_read_exercise_history_encodes_id() {
            let rest = rest_with_response(Some(
                Response::builder()
                    .status(200)
                    .json(&json!([{ "date": "2026-10-14", "sets": [{ "reps": 5, "weight": 100 }] }])),
            ));

            assert_eq!(
                rest.read_exercise_history("Farmer's Walk".into())
                    .await
                    .unwrap(),
                vec![domain::HistoryEntry {
                    date: NaiveDate::from_ymd_opt(2026, 10, 14).unwrap(),
                    sets: vec![domain::WorkoutSet {
                        reps: 5,
                        weight: 100
                    }],
                }]
            );
            assert_eq!(
                rest.sender.url(),
                Some("http://127.0.0.1:5000/api/exercise_history/Farmer's%20Walk".to_string())
            );
        }

        #[wasm_bindgen_test]
        async fn test_read_video_not_found() {
            let rest = rest_with_response(Some(
                Response::builder()
                    .status(404)
                    .json(&json!({ "error": "No videos found" })),
            ));

            assert!(matches!(
                rest.read_video("Plank".to_string()).await,
                Err(domain::ReadError::NotFound)
            ));
            assert_eq!(
                rest.sender.url(),
                Some("http://127.0.0.1:5000/api/youtube/search?query=Plank".to_string())
            );
        }

        #[wasm_bindgen_test]
        fn test_gloo_net_send_request_abort() {
            let sender = GlooNetSendRequest::default();
            let signal = sender.abort_signal().unwrap();

            sender.abort();

            assert!(signal.aborted());
            assert!(!sender.abort_signal().unwrap().aborted());

            let signal = sender.abort_signal().unwrap();
            drop(sender);

            assert!(signal.aborted());
        }

        fn rest_with_response(
            response: Option<Result<Response, gloo_net::Error>>,
        ) -> REST<MockSendRequest> {
            REST {
                base_url: "http://127.0.0.1:5000/".to_string(),
                sender: MockSendRequest {
                    request: RefCell::new(None),
                    response: RefCell::new(response),
                },
            }
        }

        struct MockSendRequest {
            request: RefCell<Option<Request>>,
            response: RefCell<Option<Result<Response, gloo_net::Error>>>,
        }

        impl MockSendRequest {
            fn url(&self) -> Option<String> {
                self.request.borrow().as_ref().map(Request::url)
            }

            fn method(&self) -> Option<Method> {
                self.request.borrow().as_ref().map(Request::method)
            }
        }

        impl SendRequest for MockSendRequest {
            async fn send_request(&self, request: Request) -> Result<Response, gloo_net::Error> {
                *self.request.borrow_mut() = Some(request);
                (*self.response.borrow_mut())
                    .take()
                    .unwrap_or(Err(gloo_net::Error::GlooError("no response".to_string())))
            }
        }
    }
}
