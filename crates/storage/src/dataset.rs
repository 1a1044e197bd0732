use gymatlas_domain::{self as domain, Property};
use log::debug;
use serde::{Deserialize, Serialize};

const EXERCISES_JSON: &str = include_str!("../data/exercises.json");

#[derive(thiserror::Error, Debug)]
pub enum DatasetError {
    #[error("invalid exercise dataset: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid exercise \"{id}\": {error}")]
    Property {
        id: String,
        error: domain::PropertyError,
    },
}

/// The exercise dataset bundled with the application.
pub fn catalog() -> Result<domain::Catalog, DatasetError> {
    let exercises = parse(EXERCISES_JSON)?;
    debug!("loaded {} exercises", exercises.len());
    Ok(domain::Catalog::new(exercises))
}

pub fn parse(json: &str) -> Result<Vec<domain::Exercise>, DatasetError> {
    serde_json::from_str::<Vec<Exercise>>(json)?
        .into_iter()
        .map(domain::Exercise::try_from)
        .collect()
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub force: Option<String>,
    #[serde(default)]
    pub level: Option<String>,
    #[serde(default)]
    pub mechanic: Option<String>,
    #[serde(default)]
    pub equipment: Option<String>,
    #[serde(default)]
    pub primary_muscles: Vec<String>,
    #[serde(default)]
    pub secondary_muscles: Vec<String>,
    #[serde(default)]
    pub instructions: Vec<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
}

impl TryFrom<Exercise> for domain::Exercise {
    type Error = DatasetError;

    fn try_from(value: Exercise) -> Result<Self, Self::Error> {
        let id = value.id.clone();
        let property_error = |error| DatasetError::Property {
            id: id.clone(),
            error,
        };
        Ok(Self {
            primary_muscles: muscles(&value.primary_muscles).map_err(property_error)?,
            secondary_muscles: muscles(&value.secondary_muscles).map_err(property_error)?,
            equipment: property(value.equipment.as_deref()).map_err(property_error)?,
            level: property(value.level.as_deref()).map_err(property_error)?,
            force: property(value.force.as_deref()).map_err(property_error)?,
            mechanic: property(value.mechanic.as_deref()).map_err(property_error)?,
            category: property(value.category.as_deref()).map_err(property_error)?,
            id: value.id.into(),
            name: value.name,
            instructions: value.instructions,
            images: value.images,
        })
    }
}

impl From<&domain::Exercise> for Exercise {
    fn from(value: &domain::Exercise) -> Self {
        Self {
            id: value.id.to_string(),
            name: value.name.clone(),
            force: value.force.map(|p| p.name().to_string()),
            level: value.level.map(|p| p.name().to_string()),
            mechanic: value.mechanic.map(|p| p.name().to_string()),
            equipment: value.equipment.map(|p| p.name().to_string()),
            primary_muscles: names(&value.primary_muscles),
            secondary_muscles: names(&value.secondary_muscles),
            instructions: value.instructions.clone(),
            category: value.category.map(|p| p.name().to_string()),
            images: value.images.clone(),
        }
    }
}

fn muscles(values: &[String]) -> Result<Vec<domain::Muscle>, domain::PropertyError> {
    values
        .iter()
        .map(|value| domain::Muscle::try_from(value.as_str()))
        .collect()
}

fn property<'a, T>(value: Option<&'a str>) -> Result<Option<T>, domain::PropertyError>
where
    T: TryFrom<&'a str, Error = domain::PropertyError>,
{
    value.map(T::try_from).transpose()
}

fn names(muscles: &[domain::Muscle]) -> Vec<String> {
    muscles.iter().map(|m| m.name().to_string()).collect()
}
