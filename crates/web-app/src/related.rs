use gymatlas_domain::{Catalog, Exercise};

use crate::random_index;

/// Number of related exercises shown per relation.
pub const RELATED_LIMIT: usize = 4;

/// Random selection of exercises related to the one on display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Related<'a> {
    pub by_muscle: Vec<&'a Exercise>,
    pub by_equipment: Vec<&'a Exercise>,
}

impl<'a> Related<'a> {
    #[must_use]
    pub fn new(catalog: &'a Catalog, exercise: &Exercise) -> Self {
        Self {
            by_muscle: catalog.related_by_muscle(exercise, RELATED_LIMIT, random_index),
            by_equipment: catalog.related_by_equipment(exercise, RELATED_LIMIT, random_index),
        }
    }
}
