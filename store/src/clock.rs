// store/src/clock.rs
use chrono::{NaiveDate, Utc};

/// Source of the current calendar date. The store never reads the system
/// clock directly; "today" always comes through this seam.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// The UTC calendar date, matching the `YYYY-MM-DD` prefix of an ISO
/// timestamp.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// A clock pinned to one date. Used to make date-dependent views
/// deterministic under test.
#[derive(Clone, Copy, Debug)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::{Clock, FixedClock};
    use chrono::NaiveDate;

    #[test]
    fn fixed_clock_reports_its_date() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();
        assert_eq!(FixedClock(date).today(), date);
    }
}
