use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::errors::TimestampRangeError;
use crate::timestamp::UnixTimestamp;

/// Represents an inclusive range of timestamps, written as `start,end`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "utoipa", schema(value_type = String, example = "1739600000,1739688964"))]
pub struct TimestampRange(pub RangeInclusive<UnixTimestamp>);

impl TimestampRange {
    pub const fn new(start: UnixTimestamp, end: UnixTimestamp) -> Self {
        Self(start..=end)
    }

    pub const fn start(&self) -> UnixTimestamp {
        *self.0.start()
    }

    pub const fn end(&self) -> UnixTimestamp {
        *self.0.end()
    }

    pub fn contains(&self, ts: UnixTimestamp) -> bool {
        self.0.contains(&ts)
    }

    /// Seconds between start and end, wrapping like timestamp addition does.
    pub const fn duration_secs(&self) -> i64 {
        self.end()
            .secs_since_epoch()
            .wrapping_sub(self.start().secs_since_epoch())
    }

    pub fn assert_time_is_valid(self) -> Result<Self, TimestampRangeError> {
        self.assert_time_is_valid_at(UnixTimestamp::now())
    }

    pub fn assert_time_is_valid_at(self, now: UnixTimestamp) -> Result<Self, TimestampRangeError> {
        if self.start() > self.end() {
            return Err(TimestampRangeError::StartAfterEnd);
        }
        if self.end() > now {
            return Err(TimestampRangeError::EndInFuture);
        }
        if self.start() == self.end() {
            return Err(TimestampRangeError::StartEqualsEnd);
        }

        Ok(self)
    }
}

impl From<RangeInclusive<UnixTimestamp>> for TimestampRange {
    fn from(range: RangeInclusive<UnixTimestamp>) -> Self {
        Self(range)
    }
}

impl fmt::Display for TimestampRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.start(), self.end())
    }
}

impl FromStr for TimestampRange {
    type Err = TimestampRangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.replace(' ', "");
        let (start, end) = s
            .split_once(',')
            .ok_or_else(|| TimestampRangeError::MissingSeparator(s.clone()))?;
        Ok(Self::new(start.parse()?, end.parse()?))
    }
}
