#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod debounce;
pub mod log;
pub mod related;
pub mod service;
pub mod settings;
pub mod workout_progress;

pub use debounce::Debouncer;
pub use related::Related;
pub use service::Service;
pub use settings::{Settings, SettingsRepository, SettingsService, ViewMode};
pub use workout_progress::WorkoutProgress;

/// Random index in `0..upper`, or 0 if `upper` is 0.
#[must_use]
pub fn random_index(upper: usize) -> usize {
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_precision_loss,
        clippy::cast_sign_loss
    )]
    let index = (js_sys::Math::random() * upper as f64) as usize;
    index.min(upper.saturating_sub(1))
}
