use chrono::{DateTime, NaiveDateTime, Utc};

use crate::errors::TimestampError;
use crate::timestamp::UnixTimestamp;

/// 1970-01-01T00:00:00.000 UTC, the instant a [`UnixTimestamp`] counts from.
pub const EPOCH: DateTime<Utc> = DateTime::<Utc>::UNIX_EPOCH;

/// Whole seconds of the last instant chrono can represent.
fn max_secs() -> i64 {
    DateTime::<Utc>::MAX_UTC.timestamp()
}

impl UnixTimestamp {
    /// `EPOCH + secs`, clamped to `DateTime::<Utc>::MIN_UTC ..= MAX_UTC`.
    ///
    /// `MAX_UTC` has a non-zero sub-second part, so the last representable
    /// whole second already maps to `MAX_UTC`. This keeps
    /// `UnixTimestamp::from_datetime(MAX_UTC).to_datetime() == MAX_UTC`.
    pub fn to_datetime(self) -> DateTime<Utc> {
        let secs = self.secs_since_epoch();
        match DateTime::from_timestamp(secs, 0) {
            Some(dt) if secs < max_secs() => dt,
            _ if secs > 0 => {
                tracing::debug!(secs, "timestamp saturated to maximum datetime");
                DateTime::<Utc>::MAX_UTC
            }
            _ => {
                tracing::debug!(secs, "timestamp saturated to minimum datetime");
                DateTime::<Utc>::MIN_UTC
            }
        }
    }

    /// Non saturating variant of [`UnixTimestamp::to_datetime`].
    pub fn try_to_datetime(self) -> Result<DateTime<Utc>, TimestampError> {
        let secs = self.secs_since_epoch();
        DateTime::from_timestamp(secs, 0).ok_or(TimestampError::OutOfRange(secs))
    }

    pub fn to_naive_datetime(self) -> NaiveDateTime {
        self.to_datetime().naive_utc()
    }

    /// Whole seconds between [`EPOCH`] and `dt`. The sub-second part is
    /// truncated toward zero, before and after the epoch alike.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        let secs = dt.timestamp();
        // chrono floors pre-epoch instants
        if secs < 0 && dt.timestamp_subsec_nanos() > 0 {
            Self::new(secs + 1)
        } else {
            Self::new(secs)
        }
    }
}

impl From<UnixTimestamp> for DateTime<Utc> {
    fn from(ts: UnixTimestamp) -> Self {
        ts.to_datetime()
    }
}

impl From<DateTime<Utc>> for UnixTimestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self::from_datetime(dt)
    }
}

impl From<UnixTimestamp> for NaiveDateTime {
    fn from(ts: UnixTimestamp) -> Self {
        ts.to_naive_datetime()
    }
}

impl From<NaiveDateTime> for UnixTimestamp {
    fn from(dt: NaiveDateTime) -> Self {
        Self::from_datetime(dt.and_utc())
    }
}
