use std::cell::Cell;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use crate::domain::Clock;

/// Wall-clock time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock that stays where it is put.
///
/// `set` takes `&self` so a driver can move time while a service holds a
/// shared reference to the clock.
#[derive(Debug, Clone)]
pub struct FixedClock {
    instant: Cell<DateTime<Utc>>,
}

impl FixedClock {
    pub fn at(instant: DateTime<Utc>) -> Self {
        Self {
            instant: Cell::new(instant),
        }
    }

    /// Midnight UTC on the given day.
    pub fn on(date: NaiveDate) -> Self {
        Self::at(midnight(date))
    }

    pub fn set(&self, instant: DateTime<Utc>) {
        self.instant.set(instant);
    }

    pub fn set_date(&self, date: NaiveDate) {
        self.set(midnight(date));
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.instant.get()
    }
}

fn midnight(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::default()).and_utc()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_moves_only_when_set() {
        let start = NaiveDate::from_ymd_opt(2012, 1, 10).unwrap();
        let clock = FixedClock::on(start);
        assert_eq!(clock.now().date_naive(), start);
        assert_eq!(clock.now(), clock.now());

        let later = NaiveDate::from_ymd_opt(2012, 1, 14).unwrap();
        clock.set_date(later);
        assert_eq!(clock.now().to_rfc3339(), "2012-01-14T00:00:00+00:00");
    }

    #[test]
    fn test_system_clock_is_current() {
        let before = Utc::now();
        let now = SystemClock.now();
        assert!(now >= before);
    }
}
