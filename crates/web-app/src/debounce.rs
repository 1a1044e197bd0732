use chrono::Duration;
use gloo_timers::callback::Timeout;

/// Runs only the last of a burst of calls, once the quiet period has passed.
///
/// A pending call is cancelled when the debouncer is dropped.
pub struct Debouncer {
    millis: u32,
    timeout: Option<Timeout>,
}

impl Debouncer {
    #[must_use]
    pub fn new(quiet_period: Duration) -> Self {
        Self {
            millis: u32::try_from(quiet_period.num_milliseconds().max(0)).unwrap_or(u32::MAX),
            timeout: None,
        }
    }

    /// Replaces any pending call and restarts the quiet period.
    pub fn call(&mut self, f: impl FnOnce() + 'static) {
        self.timeout = Some(Timeout::new(self.millis, f));
    }

    /// Returns whether a call was scheduled. It is not run.
    pub fn cancel(&mut self) -> bool {
        self.timeout.take().map(Timeout::cancel).is_some()
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(gymatlas_domain::COMPLETED_SETS_QUIET_PERIOD)
    }
}
