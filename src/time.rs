use chrono::{Local, NaiveDateTime, SubsecRound};

/// Source of the local wall-clock time stamped onto each entry.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Local time from the OS, truncated to whole seconds.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local().trunc_subsecs(0)
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
