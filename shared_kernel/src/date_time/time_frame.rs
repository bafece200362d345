use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeFrame<T> {
    pub from: T,
    pub to: T,
}

impl TimeFrame<DateTime<Utc>> {
    /// Whole minutes between `from` and `to`, truncated toward zero.
    /// Negative when `to` is earlier than `from`.
    pub fn elapsed_minutes(&self) -> i64 {
        (self.to - self.from).num_minutes()
    }
}

#[cfg(test)]
mod tests {
    use super::TimeFrame;
    use chrono::{Duration, TimeZone, Utc};

    #[test]
    fn test_partial_minutes_are_dropped() {
        let from = Utc.with_ymd_and_hms(2023, 5, 1, 8, 0, 0).unwrap();
        let frame = TimeFrame {
            from,
            to: from + Duration::seconds(90 * 60 + 59),
        };
        assert_eq!(frame.elapsed_minutes(), 90);
    }

    #[test]
    fn test_reversed_frame_is_negative() {
        let from = Utc.with_ymd_and_hms(2023, 5, 1, 8, 0, 0).unwrap();
        let frame = TimeFrame {
            from,
            to: from - Duration::minutes(5),
        };
        assert_eq!(frame.elapsed_minutes(), -5);
    }
}
