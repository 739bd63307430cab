//! Reporting periods.
//!
//! A period is the half-open interval `[from, to)` in UTC. Date-only ledger
//! fields are placed at midnight UTC of their date before membership checks.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A resolved reporting window, always with `from <= to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    from: DateTime<Utc>,
    to: DateTime<Utc>,
}

/// A period whose start lies after its end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Invalid period: from {from} is after to {to}")]
pub struct InvalidPeriod {
    /// Requested start.
    pub from: DateTime<Utc>,
    /// Requested end.
    pub to: DateTime<Utc>,
}

impl Period {
    /// Creates a period, rejecting `from > to`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidPeriod`] when `from` is after `to`.
    pub fn new(from: DateTime<Utc>, to: DateTime<Utc>) -> Result<Self, InvalidPeriod> {
        if from > to {
            return Err(InvalidPeriod { from, to });
        }
        Ok(Self { from, to })
    }

    /// Inclusive start of the period.
    #[must_use]
    pub const fn from(&self) -> DateTime<Utc> {
        self.from
    }

    /// Exclusive end of the period.
    #[must_use]
    pub const fn to(&self) -> DateTime<Utc> {
        self.to
    }

    /// Returns true if `ts` falls in `[from, to)`.
    #[must_use]
    pub fn contains(&self, ts: DateTime<Utc>) -> bool {
        self.from <= ts && ts < self.to
    }

    /// Returns true if midnight UTC of `date` falls in the period.
    #[must_use]
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        self.contains(midnight_utc(date))
    }
}

/// Places a calendar date at midnight UTC.
#[must_use]
pub fn midnight_utc(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

/// A caller's period with optional bounds, resolved against a clock instant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodRequest {
    /// Start of the range; absent means the beginning of time.
    pub from: Option<DateTime<Utc>>,
    /// End of the range; absent means "now".
    pub to: Option<DateTime<Utc>>,
}

impl PeriodRequest {
    /// A request covering everything up to "now".
    #[must_use]
    pub const fn all_time() -> Self {
        Self {
            from: None,
            to: None,
        }
    }

    /// A request with both bounds set.
    #[must_use]
    pub const fn between(from: DateTime<Utc>, to: DateTime<Utc>) -> Self {
        Self {
            from: Some(from),
            to: Some(to),
        }
    }

    /// Fills in missing bounds and validates the result.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidPeriod`] when the resolved start is after the end.
    pub fn resolve(self, now: DateTime<Utc>) -> Result<Period, InvalidPeriod> {
        Period::new(
            self.from.unwrap_or(DateTime::<Utc>::MIN_UTC),
            self.to.unwrap_or(now),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ts(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_period_is_half_open() {
        let period = Period::new(ts(2024, 1, 1), ts(2024, 2, 1)).unwrap();
        assert!(period.contains(ts(2024, 1, 1)));
        assert!(period.contains(ts(2024, 1, 31)));
        assert!(!period.contains(ts(2024, 2, 1)));
        assert!(!period.contains(ts(2023, 12, 31)));
    }

    #[test]
    fn test_period_rejects_reversed_bounds() {
        let err = Period::new(ts(2024, 2, 1), ts(2024, 1, 1)).unwrap_err();
        assert_eq!(err.from, ts(2024, 2, 1));
        assert_eq!(err.to, ts(2024, 1, 1));
    }

    #[test]
    fn test_empty_period_contains_nothing() {
        let period = Period::new(ts(2024, 1, 1), ts(2024, 1, 1)).unwrap();
        assert!(!period.contains(ts(2024, 1, 1)));
    }

    #[test]
    fn test_contains_date_uses_midnight() {
        let period = Period::new(ts(2024, 1, 1), ts(2024, 1, 31)).unwrap();
        assert!(period.contains_date(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()));
        assert!(!period.contains_date(NaiveDate::from_ymd_opt(2024, 1, 31).unwrap()));
    }

    #[test]
    fn test_request_defaults() {
        let now = ts(2024, 6, 1);
        let period = PeriodRequest::all_time().resolve(now).unwrap();
        assert_eq!(period.from(), DateTime::<Utc>::MIN_UTC);
        assert_eq!(period.to(), now);
    }

    #[test]
    fn test_request_future_from_without_to_is_invalid() {
        let now = ts(2024, 6, 1);
        let request = PeriodRequest {
            from: Some(ts(2025, 1, 1)),
            to: None,
        };
        assert!(request.resolve(now).is_err());
    }
}
