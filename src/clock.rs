//! Source of "today" for resolving the zero year/month sentinels.

use chrono::{Local, NaiveDate};

pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Reads the local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate { Local::now().date_naive() }
}

/// Always reports the same date. Useful for deterministic tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate { self.0 }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn today(&self) -> NaiveDate { (**self).today() }
}
