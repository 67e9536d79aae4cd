use chrono::{DateTime, TimeZone, Utc};
use chrono_tz::Tz;

const MILLIS_PER_SECOND: i64 = 1_000;
const MILLIS_PER_MINUTE: i64 = 60 * MILLIS_PER_SECOND;
const MILLIS_PER_HOUR: i64 = 60 * MILLIS_PER_MINUTE;
const MILLIS_PER_DAY: i64 = 24 * MILLIS_PER_HOUR;

/// The fixed instant the countdown runs toward, kept with the timezone it
/// was configured in so the hero badge can show local wall time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deadline {
    local: DateTime<Tz>,
}

impl Deadline {
    pub fn new(local: DateTime<Tz>) -> Self {
        Self { local }
    }

    pub fn local(&self) -> DateTime<Tz> {
        self.local
    }

    pub fn utc(&self) -> DateTime<Utc> {
        self.local.with_timezone(&Utc)
    }

    pub fn remaining_at(&self, now: DateTime<Utc>) -> RemainingTime {
        compute_remaining(self.utc(), now)
    }
}

/// Whole days, hours, minutes and seconds left until a deadline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RemainingTime {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl RemainingTime {
    pub const ZERO: Self = Self {
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Milliseconds represented by the four fields.
    pub fn total_millis(&self) -> u64 {
        self.days * MILLIS_PER_DAY as u64
            + self.hours * MILLIS_PER_HOUR as u64
            + self.minutes * MILLIS_PER_MINUTE as u64
            + self.seconds * MILLIS_PER_SECOND as u64
    }

    /// Label/value pairs in display order.
    pub fn units(&self) -> [(&'static str, u64); 4] {
        [
            ("DAYS", self.days),
            ("HOURS", self.hours),
            ("MINUTES", self.minutes),
            ("SECONDS", self.seconds),
        ]
    }

    fn from_millis(delta: i64) -> Self {
        if delta <= 0 {
            return Self::ZERO;
        }

        Self {
            days: (delta / MILLIS_PER_DAY) as u64,
            hours: ((delta % MILLIS_PER_DAY) / MILLIS_PER_HOUR) as u64,
            minutes: ((delta % MILLIS_PER_HOUR) / MILLIS_PER_MINUTE) as u64,
            seconds: ((delta % MILLIS_PER_MINUTE) / MILLIS_PER_SECOND) as u64,
        }
    }
}

/// Time left between `now` and `deadline`, floored to whole seconds.
///
/// Once `now` reaches the deadline the result is all-zero and stays there.
pub fn compute_remaining<A, B>(deadline: DateTime<A>, now: DateTime<B>) -> RemainingTime
where
    A: TimeZone,
    B: TimeZone,
{
    let delta = deadline.signed_duration_since(now).num_milliseconds();
    RemainingTime::from_millis(delta)
}
