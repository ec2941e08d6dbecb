//! Calendar access
//!
//! Vehicle age is measured against the current year, which rating code reads
//! through the [`Clock`] trait rather than the wall clock.

use chrono::{Datelike, NaiveDate, Utc};

/// Source of the current date
pub trait Clock: Send + Sync {
    /// Returns today's date
    fn today(&self) -> NaiveDate;

    /// Returns the current calendar year
    fn current_year(&self) -> i32 {
        self.today().year()
    }
}

/// Clock backed by the system time in UTC
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// Clock pinned to a fixed date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    date: NaiveDate,
}

impl FixedClock {
    /// Creates a clock that always reports `date`
    pub fn new(date: NaiveDate) -> Self {
        Self { date }
    }

    /// Creates a clock pinned to January 1st of `year`
    ///
    /// Falls back to the minimum representable date for years chrono
    /// cannot express.
    pub fn year(year: i32) -> Self {
        let date = NaiveDate::from_ymd_opt(year, 1, 1).unwrap_or(NaiveDate::MIN);
        Self { date }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.date
    }
}

impl<C: Clock + ?Sized> Clock for std::sync::Arc<C> {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}
