use chrono::{DateTime, Utc};

/// Source of the current instant.
///
/// Accounts stamp every transaction with `now()`, so tests drive time by
/// injecting their own implementation.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}
