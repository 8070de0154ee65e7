use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Time left until a fixture starts, split for display.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Countdown {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    pub started: bool,
}

impl Countdown {
    /// Countdown from `now` to `start`. Once the start time is reached every
    /// field is zero and `started` is set.
    pub fn until(start: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        let remaining = start - now;
        if remaining.num_milliseconds() <= 0 {
            return Countdown {
                started: true,
                ..Default::default()
            };
        }

        // Partial seconds are dropped
        let total = remaining.num_seconds();
        Countdown {
            days: total / 86_400,
            hours: (total % 86_400) / 3_600,
            minutes: (total % 3_600) / 60,
            seconds: total % 60,
            started: false,
        }
    }
}
