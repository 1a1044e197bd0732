use std::sync::LazyLock;

use chrono::NaiveDate;
use gymatlas_domain as domain;

pub static USER: LazyLock<domain::User> = LazyLock::new(|| domain::User {
    id: 1.into(),
    username: "alice".to_string(),
});

pub static FAVORITE: LazyLock<domain::Favorite> = LazyLock::new(|| domain::Favorite {
    id: 3.into(),
    exercise_id: "Barbell_Bench_Press".into(),
    exercise_name: "Bench Press".to_string(),
});

pub static WORKOUT: LazyLock<domain::Workout> = LazyLock::new(|| domain::Workout {
    id: 5.into(),
    name: "Push Day".to_string(),
    date: NaiveDate::from_ymd_opt(2026, 10, 14).unwrap(),
    notes: "Felt strong".to_string(),
    exercises: vec![
        domain::WorkoutExercise {
            name: "Bench Press".to_string(),
            sets: vec![
                domain::WorkoutSet {
                    reps: 10,
                    weight: 135,
                },
                domain::WorkoutSet {
                    reps: 8,
                    weight: 155,
                },
            ],
        },
        domain::WorkoutExercise {
            name: "Pull Up".to_string(),
            sets: vec![domain::WorkoutSet { reps: 12, weight: 0 }],
        },
    ],
});

pub static COMPLETED_SETS: LazyLock<domain::CompletedSets> =
    LazyLock::new(|| domain::CompletedSets::from_keys(["0-0", "1-0"]));
