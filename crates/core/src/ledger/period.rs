//! Calendar periods used to filter transactions.
//!
//! Membership is a pure predicate over a timestamp's calendar month and year
//! in UTC. Stores that filter server-side use the equivalent half-open range
//! from `bounds()`.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A calendar month of a given year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MonthPeriod {
    /// Month number, 1-12.
    pub month: u32,
    /// Calendar year.
    pub year: i32,
}

impl MonthPeriod {
    /// Creates a month period. Out-of-range months are accepted and match nothing.
    #[must_use]
    pub const fn new(month: u32, year: i32) -> Self {
        Self { month, year }
    }

    /// The month containing `at`.
    #[must_use]
    pub fn containing(at: DateTime<Utc>) -> Self {
        Self::new(at.month(), at.year())
    }

    /// The current UTC month.
    #[must_use]
    pub fn current() -> Self {
        Self::containing(Utc::now())
    }

    /// Returns true if `at` falls in this month.
    #[must_use]
    pub fn contains(&self, at: &DateTime<Utc>) -> bool {
        at.month() == self.month && at.year() == self.year
    }

    /// Half-open range `[start, end)` covering the month.
    ///
    /// Returns `None` when the month does not name a real calendar month.
    #[must_use]
    pub fn bounds(&self) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        let start = NaiveDate::from_ymd_opt(self.year, self.month, 1)?;
        let end = if self.month == 12 {
            NaiveDate::from_ymd_opt(self.year.checked_add(1)?, 1, 1)?
        } else {
            NaiveDate::from_ymd_opt(self.year, self.month + 1, 1)?
        };
        Some((midnight(start)?, midnight(end)?))
    }
}

/// A calendar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct YearPeriod {
    /// Calendar year.
    pub year: i32,
}

impl YearPeriod {
    /// Creates a year period.
    #[must_use]
    pub const fn new(year: i32) -> Self {
        Self { year }
    }

    /// Returns true if `at` falls in this year.
    #[must_use]
    pub fn contains(&self, at: &DateTime<Utc>) -> bool {
        at.year() == self.year
    }

    /// Half-open range `[start, end)` covering the year.
    #[must_use]
    pub fn bounds(&self) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        let start = NaiveDate::from_ymd_opt(self.year, 1, 1)?;
        let end = NaiveDate::from_ymd_opt(self.year.checked_add(1)?, 1, 1)?;
        Some((midnight(start)?, midnight(end)?))
    }
}

fn midnight(date: NaiveDate) -> Option<DateTime<Utc>> {
    Some(date.and_hms_opt(0, 0, 0)?.and_utc())
}
