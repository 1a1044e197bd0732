use std::cmp::Ordering;

use log::trace;

use crate::{
    Equipment, Exercise, Force, ItemsPerPage, Level, Muscle, Page, Pagination, Property,
};

/// Search term and categorical selections of a listing page.
///
/// A `None` selection matches every exercise.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExerciseFilter {
    pub search: String,
    pub muscle: Option<Muscle>,
    pub equipment: Option<Equipment>,
    pub level: Option<Level>,
    pub force: Option<Force>,
}

impl ExerciseFilter {
    #[must_use]
    pub fn matches(&self, exercise: &Exercise) -> bool {
        self.matches_search(exercise)
            && self.muscle.is_none_or(|m| exercise.primary_muscles.contains(&m))
            && self.equipment.is_none_or(|e| exercise.equipment == Some(e))
            && self.level.is_none_or(|l| exercise.level == Some(l))
            && self.force.is_none_or(|f| exercise.force == Some(f))
    }

    fn matches_search(&self, exercise: &Exercise) -> bool {
        let search = self.search.trim().to_lowercase();

        if search.is_empty() {
            return true;
        }

        let contains =
            |value: Option<&str>| value.is_some_and(|v| v.to_lowercase().contains(&search));

        contains(Some(exercise.name.as_str()))
            || contains(exercise.force.map(Property::name))
            || contains(exercise.equipment.map(Property::name))
            || contains(exercise.level.map(Property::name))
            || contains(exercise.category.map(Property::name))
            || exercise
                .primary_muscles
                .iter()
                .any(|m| contains(Some(m.name())))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.search.trim().is_empty()
            && self.muscle.is_none()
            && self.equipment.is_none()
            && self.level.is_none()
            && self.force.is_none()
    }

    pub fn exercises<'a>(
        &self,
        exercises: impl IntoIterator<Item = &'a Exercise>,
    ) -> impl Iterator<Item = &'a Exercise> {
        exercises.into_iter().filter(|e| self.matches(e))
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    #[default]
    Name,
    Force,
    Equipment,
    Level,
}

impl SortKey {
    /// Parses the value of a sort selection. Unknown keys sort by name.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            "force" => SortKey::Force,
            "equipment" => SortKey::Equipment,
            "level" => SortKey::Level,
            _ => SortKey::Name,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            SortKey::Name => "Name",
            SortKey::Force => "Force Type",
            SortKey::Equipment => "Equipment",
            SortKey::Level => "Level",
        }
    }

    /// Value of the sorted attribute, with absent attributes as the empty string.
    #[must_use]
    pub fn value(self, exercise: &Exercise) -> &str {
        match self {
            SortKey::Name => &exercise.name,
            SortKey::Force => exercise.force.map_or("", Property::name),
            SortKey::Equipment => exercise.equipment.map_or("", Property::name),
            SortKey::Level => exercise.level.map_or("", Property::name),
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            "desc" => SortOrder::Descending,
            _ => SortOrder::Ascending,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Sort {
    pub key: SortKey,
    pub order: SortOrder,
}

impl Sort {
    #[must_use]
    pub fn compare(&self, a: &Exercise, b: &Exercise) -> Ordering {
        let ordering = collate(self.key.value(a), self.key.value(b));
        match self.order {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    }
}

/// Case-insensitive ordering, with lower case before upper case on ties.
#[must_use]
pub fn collate(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}

/// Filters, sorts and paginates `exercises` without modifying the source.
pub fn derive<'a>(
    exercises: impl IntoIterator<Item = &'a Exercise>,
    filter: &ExerciseFilter,
    sort: &Sort,
    pagination: &Pagination,
) -> Page<&'a Exercise> {
    let matches = sorted_matches(exercises, filter, sort);
    let mut pagination = *pagination;
    pagination.clamp(matches.len());
    page(&pagination, &matches)
}

fn sorted_matches<'a>(
    exercises: impl IntoIterator<Item = &'a Exercise>,
    filter: &ExerciseFilter,
    sort: &Sort,
) -> Vec<&'a Exercise> {
    let mut matches = filter.exercises(exercises).collect::<Vec<_>>();
    matches.sort_by(|a, b| sort.compare(a, b));
    matches
}

fn page<'a>(pagination: &Pagination, matches: &[&'a Exercise]) -> Page<&'a Exercise> {
    Page {
        items: pagination.window(matches).to_vec(),
        current_page: pagination.current_page,
        total_pages: pagination.total_pages(matches.len()),
        total_items: matches.len(),
    }
}

/// View state of a listing page.
///
/// The filtered and sorted sequence is only recomputed when the filter or the sort changes.
/// Every change of the search term, the filter, the sort or the page size moves the cursor
/// back to the first page.
pub struct Listing<'a> {
    exercises: Vec<&'a Exercise>,
    filter: ExerciseFilter,
    sort: Sort,
    pagination: Pagination,
    matches: Option<Vec<&'a Exercise>>,
}

impl<'a> Listing<'a> {
    pub fn new(exercises: impl IntoIterator<Item = &'a Exercise>) -> Self {
        Self::with_items_per_page(exercises, ItemsPerPage::default())
    }

    pub fn with_items_per_page(
        exercises: impl IntoIterator<Item = &'a Exercise>,
        items_per_page: ItemsPerPage,
    ) -> Self {
        Self {
            exercises: exercises.into_iter().collect(),
            filter: ExerciseFilter::default(),
            sort: Sort::default(),
            pagination: Pagination::new(items_per_page),
            matches: None,
        }
    }

    #[must_use]
    pub fn filter(&self) -> &ExerciseFilter {
        &self.filter
    }

    #[must_use]
    pub fn sort(&self) -> Sort {
        self.sort
    }

    #[must_use]
    pub fn pagination(&self) -> Pagination {
        self.pagination
    }

    pub fn set_search(&mut self, search: &str) {
        if self.filter.search != search {
            self.filter.search = search.to_string();
            self.invalidate();
        }
        self.pagination.reset();
    }

    pub fn set_filter(&mut self, filter: ExerciseFilter) {
        if self.filter != filter {
            self.filter = filter;
            self.invalidate();
        }
        self.pagination.reset();
    }

    pub fn set_muscle(&mut self, muscle: Option<Muscle>) {
        self.set_filter(ExerciseFilter {
            muscle,
            ..self.filter.clone()
        });
    }

    pub fn set_equipment(&mut self, equipment: Option<Equipment>) {
        self.set_filter(ExerciseFilter {
            equipment,
            ..self.filter.clone()
        });
    }

    pub fn set_level(&mut self, level: Option<Level>) {
        self.set_filter(ExerciseFilter {
            level,
            ..self.filter.clone()
        });
    }

    pub fn set_force(&mut self, force: Option<Force>) {
        self.set_filter(ExerciseFilter {
            force,
            ..self.filter.clone()
        });
    }

    pub fn set_sort(&mut self, sort: Sort) {
        if self.sort != sort {
            self.sort = sort;
            self.invalidate();
        }
        self.pagination.reset();
    }

    pub fn set_items_per_page(&mut self, items_per_page: ItemsPerPage) {
        self.pagination.set_items_per_page(items_per_page);
    }

    pub fn set_page(&mut self, page: usize) {
        self.pagination.current_page = page;
        let len = self.matches().len();
        self.pagination.clamp(len);
    }

    pub fn next_page(&mut self) {
        let len = self.matches().len();
        self.pagination.next(len);
    }

    pub fn previous_page(&mut self) {
        let len = self.matches().len();
        self.pagination.previous(len);
    }

    /// All exercises that pass the filter, in sort order.
    pub fn matches(&mut self) -> &[&'a Exercise] {
        if self.matches.is_none() {
            let matches = sorted_matches(self.exercises.iter().copied(), &self.filter, &self.sort);
            trace!(
                "recomputed listing: {} of {} exercises",
                matches.len(),
                self.exercises.len()
            );
            self.matches = Some(matches);
        }
        self.matches.as_deref().unwrap_or_default()
    }

    pub fn page(&mut self) -> Page<&'a Exercise> {
        let len = self.matches().len();
        self.pagination.clamp(len);
        let pagination = self.pagination;
        page(&pagination, self.matches())
    }

    fn invalidate(&mut self) {
        self.matches = None;
    }
}

/// Distinct attribute values present in a set of exercises, in order of first occurrence.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FilterOptions {
    pub muscles: Vec<Muscle>,
    pub equipment: Vec<Equipment>,
    pub levels: Vec<Level>,
    pub forces: Vec<Force>,
}

impl FilterOptions {
    pub fn new<'a>(exercises: impl IntoIterator<Item = &'a Exercise>) -> Self {
        fn push<T: PartialEq>(values: &mut Vec<T>, value: T) {
            if !values.contains(&value) {
                values.push(value);
            }
        }

        let mut options = FilterOptions::default();

        for exercise in exercises {
            for muscle in &exercise.primary_muscles {
                push(&mut options.muscles, *muscle);
            }
            if let Some(equipment) = exercise.equipment {
                push(&mut options.equipment, equipment);
            }
            if let Some(level) = exercise.level {
                push(&mut options.levels, level);
            }
            if let Some(force) = exercise.force {
                push(&mut options.forces, force);
            }
        }

        options
    }
}
