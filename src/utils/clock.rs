use chrono::{DateTime, Local};

/// Represents an entity responsible for providing dates across the
/// application. This allows the "empty date means today" default to be tested.
#[cfg_attr(test, mockall::automock)]
pub trait Clock {
    fn now(&self) -> DateTime<Local>;
}

pub struct DefaultClock;

impl Clock for DefaultClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}
