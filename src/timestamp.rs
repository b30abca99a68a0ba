use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;

/// Wall-clock time of a recorded transition
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct TimeStamp {
    /// Seconds since Unix epoch
    pub seconds: u64,
    /// Nanoseconds part
    pub nanos: u32,
}

impl TimeStamp {
    /// Create a new timestamp from the current system time.
    ///
    /// A clock set before the Unix epoch yields the zero timestamp.
    #[must_use]
    pub fn now() -> Self {
        let duration = SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default();
        Self { seconds: duration.as_secs(), nanos: duration.subsec_nanos() }
    }
}

#[cfg(test)]
mod tests {
    use super::TimeStamp;

    #[test]
    fn test_now_is_monotone_enough() {
        let first = TimeStamp::now();
        let second = TimeStamp::now();
        assert!(first.seconds > 0);
        assert!(second >= first);
    }
}
