use chrono::{DateTime, Utc};

/// Wall-clock source used for prompt cooldown decisions.
pub trait Clock: Send + Sync {
    fn now_utc(&self) -> DateTime<Utc>;

    /// Current wall-clock time in milliseconds since the Unix epoch.
    fn now_ms(&self) -> i64 {
        self.now_utc().timestamp_millis()
    }
}

#[allow(clippy::module_name_repetitions)]
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_utc(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
