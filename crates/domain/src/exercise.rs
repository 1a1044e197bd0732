use std::slice::Iter;

use derive_more::{Deref, Display};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    pub id: ExerciseID,
    pub name: String,
    pub primary_muscles: Vec<Muscle>,
    pub secondary_muscles: Vec<Muscle>,
    pub equipment: Option<Equipment>,
    pub level: Option<Level>,
    pub force: Option<Force>,
    pub mechanic: Option<Mechanic>,
    pub category: Option<Category>,
    pub instructions: Vec<String>,
    pub images: Vec<String>,
}

impl Exercise {
    #[must_use]
    pub fn targets(&self, muscle: Muscle) -> bool {
        self.primary_muscles.contains(&muscle)
    }

    /// Image URLs relative to the application root, start pose first.
    pub fn image_paths(&self) -> impl Iterator<Item = String> + '_ {
        self.images.iter().map(|image| format!("exercises/{image}"))
    }
}

#[derive(Deref, Display, Debug, Default, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ExerciseID(String);

impl From<&str> for ExerciseID {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ExerciseID {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// A categorical exercise attribute with a closed set of values.
///
/// `name` returns the value exactly as it is stored in the exercise dataset.
pub trait Property: Clone + Copy + Sized + PartialEq + 'static {
    fn iter() -> Iter<'static, Self>;
    fn name(self) -> &'static str;

    fn from_name(name: &str) -> Option<Self> {
        Self::iter().find(|p| p.name() == name).copied()
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum PropertyError {
    #[error("unknown {kind} \"{value}\"")]
    Unknown { kind: &'static str, value: String },
}

macro_rules! impl_try_from_name {
    ($type: ident, $kind: literal) => {
        impl TryFrom<&str> for $type {
            type Error = PropertyError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::from_name(value).ok_or_else(|| PropertyError::Unknown {
                    kind: $kind,
                    value: value.to_string(),
                })
            }
        }
    };
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum Muscle {
    Abdominals,
    Abductors,
    Adductors,
    Biceps,
    Calves,
    Chest,
    Forearms,
    Glutes,
    Hamstrings,
    Lats,
    LowerBack,
    MiddleBack,
    Neck,
    Quadriceps,
    Shoulders,
    Traps,
    Triceps,
}

impl Property for Muscle {
    fn iter() -> Iter<'static, Muscle> {
        static MUSCLES: [Muscle; 17] = [
            Muscle::Abdominals,
            Muscle::Abductors,
            Muscle::Adductors,
            Muscle::Biceps,
            Muscle::Calves,
            Muscle::Chest,
            Muscle::Forearms,
            Muscle::Glutes,
            Muscle::Hamstrings,
            Muscle::Lats,
            Muscle::LowerBack,
            Muscle::MiddleBack,
            Muscle::Neck,
            Muscle::Quadriceps,
            Muscle::Shoulders,
            Muscle::Traps,
            Muscle::Triceps,
        ];
        MUSCLES.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Muscle::Abdominals => "abdominals",
            Muscle::Abductors => "abductors",
            Muscle::Adductors => "adductors",
            Muscle::Biceps => "biceps",
            Muscle::Calves => "calves",
            Muscle::Chest => "chest",
            Muscle::Forearms => "forearms",
            Muscle::Glutes => "glutes",
            Muscle::Hamstrings => "hamstrings",
            Muscle::Lats => "lats",
            Muscle::LowerBack => "lower back",
            Muscle::MiddleBack => "middle back",
            Muscle::Neck => "neck",
            Muscle::Quadriceps => "quadriceps",
            Muscle::Shoulders => "shoulders",
            Muscle::Traps => "traps",
            Muscle::Triceps => "triceps",
        }
    }
}

impl_try_from_name!(Muscle, "muscle");

impl Muscle {
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Muscle::Abdominals => "Strengthen your core for better stability and posture.",
            Muscle::Abductors => "Strengthen your outer hips and stabilize your pelvis.",
            Muscle::Adductors => "Improve inner thigh strength and hip stability.",
            Muscle::Biceps => "Grow strong, defined arms with bicep-focused training.",
            Muscle::Calves => "Build lower leg endurance and explosiveness.",
            Muscle::Chest => "Develop a stronger, more muscular chest.",
            Muscle::Forearms => "Improve grip strength and forearm definition.",
            Muscle::Glutes => "Strengthen and sculpt your glutes for power and stability.",
            Muscle::Hamstrings => "Build strong, flexible muscles on the back of your thighs.",
            Muscle::Lats => "Build wide, strong lats for a powerful back.",
            Muscle::LowerBack => "Support your spine and core with lower back strength.",
            Muscle::MiddleBack => {
                "Strengthen the muscles that support posture and pulling power."
            }
            Muscle::Neck => "Strengthen and stabilize the muscles around your neck.",
            Muscle::Quadriceps => "Power up your thighs for explosive strength and movement.",
            Muscle::Shoulders => "Build broad, powerful shoulders for upper body strength.",
            Muscle::Traps => "Develop the muscles of your upper back and neck.",
            Muscle::Triceps => "Shape and strengthen the back of your arms.",
        }
    }

    /// Path segment of the muscle group page, e.g. `middle-back`.
    #[must_use]
    pub fn slug(self) -> String {
        self.name().replace(' ', "-")
    }

    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        let name = slug.trim().replace('-', " ").to_lowercase();
        Self::from_name(&name)
    }

    /// Display form with every word capitalized, e.g. `Middle Back`.
    #[must_use]
    pub fn title(self) -> String {
        self.name()
            .split(' ')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Force {
    Pull,
    Push,
    Static,
}

impl Property for Force {
    fn iter() -> Iter<'static, Force> {
        static FORCE: [Force; 3] = [Force::Pull, Force::Push, Force::Static];
        FORCE.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Force::Pull => "pull",
            Force::Push => "push",
            Force::Static => "static",
        }
    }
}

impl_try_from_name!(Force, "force");

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Level {
    Beginner,
    Intermediate,
    Expert,
}

impl Property for Level {
    fn iter() -> Iter<'static, Level> {
        static LEVEL: [Level; 3] = [Level::Beginner, Level::Intermediate, Level::Expert];
        LEVEL.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Level::Beginner => "beginner",
            Level::Intermediate => "intermediate",
            Level::Expert => "expert",
        }
    }
}

impl_try_from_name!(Level, "level");

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Mechanic {
    Compound,
    Isolation,
}

impl Property for Mechanic {
    fn iter() -> Iter<'static, Mechanic> {
        static MECHANIC: [Mechanic; 2] = [Mechanic::Compound, Mechanic::Isolation];
        MECHANIC.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Mechanic::Compound => "compound",
            Mechanic::Isolation => "isolation",
        }
    }
}

impl_try_from_name!(Mechanic, "mechanic");

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Equipment {
    Bands,
    Barbell,
    BodyOnly,
    Cable,
    Dumbbell,
    EZCurlBar,
    ExerciseBall,
    FoamRoll,
    Kettlebells,
    Machine,
    MedicineBall,
    Other,
}

impl Property for Equipment {
    fn iter() -> Iter<'static, Equipment> {
        static EQUIPMENT: [Equipment; 12] = [
            Equipment::Bands,
            Equipment::Barbell,
            Equipment::BodyOnly,
            Equipment::Cable,
            Equipment::Dumbbell,
            Equipment::EZCurlBar,
            Equipment::ExerciseBall,
            Equipment::FoamRoll,
            Equipment::Kettlebells,
            Equipment::Machine,
            Equipment::MedicineBall,
            Equipment::Other,
        ];
        EQUIPMENT.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Equipment::Bands => "bands",
            Equipment::Barbell => "barbell",
            Equipment::BodyOnly => "body only",
            Equipment::Cable => "cable",
            Equipment::Dumbbell => "dumbbell",
            Equipment::EZCurlBar => "e-z curl bar",
            Equipment::ExerciseBall => "exercise ball",
            Equipment::FoamRoll => "foam roll",
            Equipment::Kettlebells => "kettlebells",
            Equipment::Machine => "machine",
            Equipment::MedicineBall => "medicine ball",
            Equipment::Other => "other",
        }
    }
}

impl_try_from_name!(Equipment, "equipment");

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Category {
    Cardio,
    OlympicWeightlifting,
    Plyometrics,
    Powerlifting,
    Strength,
    Stretching,
    Strongman,
}

impl Property for Category {
    fn iter() -> Iter<'static, Category> {
        static CATEGORY: [Category; 7] = [
            Category::Cardio,
            Category::OlympicWeightlifting,
            Category::Plyometrics,
            Category::Powerlifting,
            Category::Strength,
            Category::Stretching,
            Category::Strongman,
        ];
        CATEGORY.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Category::Cardio => "cardio",
            Category::OlympicWeightlifting => "olympic weightlifting",
            Category::Plyometrics => "plyometrics",
            Category::Powerlifting => "powerlifting",
            Category::Strength => "strength",
            Category::Stretching => "stretching",
            Category::Strongman => "strongman",
        }
    }
}

impl_try_from_name!(Category, "category");
