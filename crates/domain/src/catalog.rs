use std::collections::HashMap;

use log::warn;

use crate::{Exercise, ExerciseID, FilterOptions, ItemsPerPage, Muscle};

pub const MUSCLE_GROUPS_PER_PAGE: ItemsPerPage = ItemsPerPage::fixed(9);
pub const MUSCLE_GROUP_EXERCISES_PER_PAGE: ItemsPerPage = ItemsPerPage::fixed(9);
pub const RELATED_EXERCISES: usize = 4;

/// The static exercise dataset.
///
/// The dataset is loaded once and never modified. All views are derived from it.
#[derive(Debug, Default, Clone)]
pub struct Catalog {
    exercises: Vec<Exercise>,
    index: HashMap<ExerciseID, usize>,
}

impl Catalog {
    #[must_use]
    pub fn new(exercises: Vec<Exercise>) -> Self {
        let mut index = HashMap::with_capacity(exercises.len());

        for (i, exercise) in exercises.iter().enumerate() {
            if index.contains_key(&exercise.id) {
                warn!("duplicate exercise id \"{}\"", exercise.id);
                continue;
            }
            index.insert(exercise.id.clone(), i);
        }

        Self { exercises, index }
    }

    #[must_use]
    pub fn exercises(&self) -> &[Exercise] {
        &self.exercises
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }

    #[must_use]
    pub fn exercise(&self, id: &ExerciseID) -> Option<&Exercise> {
        self.index.get(id).map(|i| &self.exercises[*i])
    }

    #[must_use]
    pub fn exercise_by_name(&self, name: &str) -> Option<&Exercise> {
        self.exercises.iter().find(|e| e.name == name)
    }

    pub fn muscle_group(&self, muscle: Muscle) -> impl Iterator<Item = &Exercise> {
        self.exercises.iter().filter(move |e| e.targets(muscle))
    }

    #[must_use]
    pub fn muscle_groups(&self) -> MuscleGroups {
        MuscleGroups::new(&self.exercises)
    }

    #[must_use]
    pub fn filter_options(&self) -> FilterOptions {
        FilterOptions::new(&self.exercises)
    }

    /// Up to `limit` random other exercises sharing a primary muscle with `exercise`.
    ///
    /// `random(n)` must return an index in `0..n`.
    pub fn related_by_muscle(
        &self,
        exercise: &Exercise,
        limit: usize,
        random: impl FnMut(usize) -> usize,
    ) -> Vec<&Exercise> {
        self.related(
            exercise,
            |e| exercise.primary_muscles.iter().any(|m| e.targets(*m)),
            limit,
            random,
        )
    }

    /// Up to `limit` random other exercises using the same equipment as `exercise`.
    ///
    /// Exercises without equipment are related to each other.
    pub fn related_by_equipment(
        &self,
        exercise: &Exercise,
        limit: usize,
        random: impl FnMut(usize) -> usize,
    ) -> Vec<&Exercise> {
        self.related(exercise, |e| e.equipment == exercise.equipment, limit, random)
    }

    fn related(
        &self,
        exercise: &Exercise,
        predicate: impl Fn(&Exercise) -> bool,
        limit: usize,
        random: impl FnMut(usize) -> usize,
    ) -> Vec<&Exercise> {
        let mut related = self
            .exercises
            .iter()
            .filter(|e| e.id != exercise.id && predicate(e))
            .collect::<Vec<_>>();
        shuffle(&mut related, random);
        related.truncate(limit);
        related
    }
}

fn shuffle<T>(items: &mut [T], mut random: impl FnMut(usize) -> usize) {
    for i in (1..items.len()).rev() {
        let j = random(i + 1) % (i + 1);
        items.swap(i, j);
    }
}

/// Number of exercises per primary muscle, in order of first occurrence.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MuscleGroups {
    counts: Vec<(Muscle, usize)>,
}

impl MuscleGroups {
    pub fn new<'a>(exercises: impl IntoIterator<Item = &'a Exercise>) -> Self {
        let mut counts: Vec<(Muscle, usize)> = vec![];

        for exercise in exercises {
            for muscle in &exercise.primary_muscles {
                match counts.iter_mut().find(|(m, _)| m == muscle) {
                    Some((_, count)) => *count += 1,
                    None => counts.push((*muscle, 1)),
                }
            }
        }

        Self { counts }
    }

    #[must_use]
    pub fn counts(&self) -> &[(Muscle, usize)] {
        &self.counts
    }

    pub fn muscles(&self) -> impl Iterator<Item = Muscle> + '_ {
        self.counts.iter().map(|(m, _)| *m)
    }

    #[must_use]
    pub fn count(&self, muscle: Muscle) -> usize {
        self.counts
            .iter()
            .find(|(m, _)| *m == muscle)
            .map_or(0, |(_, count)| *count)
    }

    /// The muscle targeted by the most exercises. Ties go to the muscle encountered first.
    #[must_use]
    pub fn most_versatile(&self) -> Option<Muscle> {
        self.counts
            .iter()
            .fold(None, |max: Option<(Muscle, usize)>, &(muscle, count)| match max {
                Some((_, max_count)) if max_count >= count => max,
                _ => Some((muscle, count)),
            })
            .map(|(muscle, _)| muscle)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::{
        Equipment, Pagination, Property,
        tests::data::{BENCH_PRESS, EXERCISES, HAMSTRING_STRETCH, PLANK, PULL_UP, exercise},
    };

    fn first(n: usize) -> usize {
        n - 1
    }

    #[test]
    fn test_muscle_groups() {
        let exercises = [
            exercise("A", &[Muscle::Chest], None),
            exercise("B", &[Muscle::Chest, Muscle::Triceps], None),
            exercise("C", &[Muscle::MiddleBack], None),
        ];

        let muscle_groups = MuscleGroups::new(&exercises);

        assert_eq!(
            muscle_groups.counts(),
            &[
                (Muscle::Chest, 2),
                (Muscle::Triceps, 1),
                (Muscle::MiddleBack, 1)
            ]
        );
        assert_eq!(muscle_groups.count(Muscle::Triceps), 1);
        assert_eq!(muscle_groups.count(Muscle::Calves), 0);
        assert_eq!(muscle_groups.most_versatile(), Some(Muscle::Chest));
    }

    #[rstest]
    #[case(&[&[Muscle::Lats][..], &[Muscle::Calves][..]], Some(Muscle::Lats))]
    #[case(
        &[&[Muscle::Lats][..], &[Muscle::Calves, Muscle::Lats][..], &[Muscle::Calves][..]],
        Some(Muscle::Lats)
    )]
    #[case(
        &[&[Muscle::Lats][..], &[Muscle::Calves][..], &[Muscle::Calves][..]],
        Some(Muscle::Calves)
    )]
    #[case(&[], None)]
    fn test_muscle_groups_most_versatile(
        #[case] muscles: &[&[Muscle]],
        #[case] expected: Option<Muscle>,
    ) {
        let exercises = muscles
            .iter()
            .enumerate()
            .map(|(i, m)| exercise(&i.to_string(), m, None))
            .collect::<Vec<_>>();

        assert_eq!(MuscleGroups::new(&exercises).most_versatile(), expected);
    }

    #[test]
    fn test_catalog_exercise() {
        let catalog = Catalog::new(EXERCISES.clone());

        assert_eq!(catalog.len(), 5);
        assert_eq!(catalog.exercise(&PLANK.id), Some(&*PLANK));
        assert_eq!(catalog.exercise(&"Unknown".into()), None);
        assert_eq!(catalog.exercise_by_name("Pull Up"), Some(&*PULL_UP));
        assert_eq!(catalog.exercise_by_name("pull up"), None);
    }

    #[test]
    fn test_catalog_duplicate_id() {
        let mut duplicate = PLANK.clone();
        duplicate.name = "Side Plank".to_string();
        let catalog = Catalog::new(vec![PLANK.clone(), duplicate]);

        assert_eq!(
            catalog.exercise(&PLANK.id).map(|e| e.name.as_str()),
            Some("Plank")
        );
    }

    #[test]
    fn test_catalog_muscle_group() {
        let catalog = Catalog::new(EXERCISES.clone());

        assert_eq!(
            catalog
                .muscle_group(Muscle::Shoulders)
                .map(|e| e.name.as_str())
                .collect::<Vec<_>>(),
            vec!["Dumbbell Shoulder Press"]
        );

        let exercises = catalog.muscle_group(Muscle::Chest).collect::<Vec<_>>();
        let page = Pagination::new(MUSCLE_GROUP_EXERCISES_PER_PAGE).page(&exercises);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.items, vec![&&*BENCH_PRESS]);
    }

    #[test]
    fn test_catalog_muscle_groups_paginated() {
        let exercises = Muscle::iter()
            .map(|m| exercise(m.name(), &[*m], None))
            .collect::<Vec<_>>();
        let catalog = Catalog::new(exercises);
        let muscle_groups = catalog.muscle_groups();
        let muscles = muscle_groups.muscles().collect::<Vec<_>>();

        let pagination = Pagination::new(MUSCLE_GROUPS_PER_PAGE);

        assert_eq!(pagination.total_pages(muscles.len()), 2);
        assert_eq!(pagination.window(&muscles).len(), 9);
    }

    #[test]
    fn test_catalog_related_by_muscle() {
        let exercises = vec![
            exercise("A", &[Muscle::Chest, Muscle::Triceps], None),
            exercise("B", &[Muscle::Triceps], None),
            exercise("C", &[Muscle::Chest], None),
            exercise("D", &[Muscle::Calves], None),
            exercise("E", &[Muscle::Chest], None),
        ];
        let catalog = Catalog::new(exercises);
        let current = catalog.exercise(&"A".into()).unwrap();

        let mut related = catalog
            .related_by_muscle(current, RELATED_EXERCISES, first)
            .into_iter()
            .map(|e| e.name.as_str())
            .collect::<Vec<_>>();
        related.sort_unstable();

        assert_eq!(related, vec!["B", "C", "E"]);
        assert_eq!(catalog.related_by_muscle(current, 2, first).len(), 2);
    }

    #[test]
    fn test_catalog_related_by_equipment() {
        let exercises = vec![
            exercise("A", &[], Some(Equipment::Barbell)),
            exercise("B", &[], Some(Equipment::Barbell)),
            exercise("C", &[], None),
            exercise("D", &[], None),
        ];
        let catalog = Catalog::new(exercises);

        assert_eq!(
            catalog
                .related_by_equipment(catalog.exercise(&"A".into()).unwrap(), 4, first)
                .iter()
                .map(|e| e.name.as_str())
                .collect::<Vec<_>>(),
            vec!["B"]
        );
        assert_eq!(
            catalog
                .related_by_equipment(catalog.exercise(&"C".into()).unwrap(), 4, first)
                .iter()
                .map(|e| e.name.as_str())
                .collect::<Vec<_>>(),
            vec!["D"]
        );
    }

    #[test]
    fn test_catalog_related_excludes_current() {
        let catalog = Catalog::new(EXERCISES.clone());

        assert!(
            catalog
                .related_by_muscle(&HAMSTRING_STRETCH, RELATED_EXERCISES, first)
                .is_empty()
        );
    }

    #[test]
    fn test_shuffle() {
        let mut items = [1, 2, 3, 4];

        shuffle(&mut items, first);
        assert_eq!(items, [1, 2, 3, 4]);

        shuffle(&mut items, |_| 0);
        assert_eq!(items, [2, 3, 4, 1]);
    }

    #[test]
    fn test_catalog_filter_options() {
        let catalog = Catalog::new(EXERCISES.clone());

        assert_eq!(catalog.filter_options(), FilterOptions::new(EXERCISES.iter()));
    }
}
