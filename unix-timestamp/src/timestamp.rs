use std::borrow::Borrow;
use std::fmt;
use std::ops::Add;
use std::str::FromStr;

use crate::errors::TimestampError;

/// The number of seconds since the Unix epoch (00:00:00 UTC on 1 Jan 1970).
///
/// Represented as a signed integer because that's the standard on Unix
/// systems: negative values are instants before the epoch. Every `i64` is a
/// valid timestamp, only the conversion to a calendar datetime is bounded
/// (see [`UnixTimestamp::to_datetime`]).
///
/// Hashing and equality only look at the inner seconds, so a timestamp hashes
/// exactly like the raw `i64` and maps keyed by `UnixTimestamp` can be queried
/// with a plain integer.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "utoipa", schema(value_type = String, example = "1739688964"))]
pub struct UnixTimestamp(i64);

impl UnixTimestamp {
    pub const fn new(secs_since_epoch: i64) -> Self {
        Self(secs_since_epoch)
    }

    pub const fn secs_since_epoch(self) -> i64 {
        self.0
    }

    /// Current wall clock time, truncated to whole seconds.
    pub fn now() -> Self {
        Self(chrono::Utc::now().timestamp())
    }

    /// Parses a base-10 signed integer, returning `None` for anything else
    /// (empty input, whitespace, separators, or a value outside `i64`).
    ///
    /// Use `unwrap_or_default()` to fall back to the epoch.
    pub fn try_parse(text: &str) -> Option<Self> {
        match text.parse::<Self>() {
            Ok(ts) => Some(ts),
            Err(e) => {
                tracing::trace!(error = %e, "rejected unix timestamp");
                None
            }
        }
    }

    /// Sums the seconds of both timestamps, wrapping on `i64` overflow.
    ///
    /// Same result as the `+` operator.
    #[allow(clippy::should_implement_trait)]
    #[must_use]
    pub const fn add(self, rhs: Self) -> Self {
        Self(self.0.wrapping_add(rhs.0))
    }

    pub const fn checked_add(self, rhs: Self) -> Option<Self> {
        match self.0.checked_add(rhs.0) {
            Some(secs) => Some(Self(secs)),
            None => None,
        }
    }
}

impl Add for UnixTimestamp {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        UnixTimestamp::add(self, rhs)
    }
}

impl fmt::Display for UnixTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UnixTimestamp {
    type Err = TimestampError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>()
            .map(Self)
            .map_err(|source| TimestampError::Parse {
                input: s.to_owned(),
                source,
            })
    }
}

impl From<i64> for UnixTimestamp {
    fn from(secs_since_epoch: i64) -> Self {
        Self(secs_since_epoch)
    }
}

impl From<UnixTimestamp> for i64 {
    fn from(ts: UnixTimestamp) -> Self {
        ts.0
    }
}

impl From<UnixTimestamp> for String {
    fn from(ts: UnixTimestamp) -> Self {
        ts.to_string()
    }
}

impl Borrow<i64> for UnixTimestamp {
    fn borrow(&self) -> &i64 {
        &self.0
    }
}
