//! Seconds since the Unix epoch as a value type.
//!
//! [`UnixTimestamp`] wraps a signed `i64`, formats and parses as a plain
//! decimal string and converts to and from [`chrono::DateTime<Utc>`],
//! clamping at the bounds chrono can represent.
//!
//! ```
//! use unix_timestamp::{UnixTimestamp, EPOCH};
//!
//! let ts = UnixTimestamp::try_parse("1739688964").unwrap_or_default();
//! assert_eq!(ts.to_string(), "1739688964");
//! assert!(ts.to_datetime() > EPOCH);
//! ```
//!
//! [`chrono::DateTime<Utc>`]: chrono::DateTime

pub mod datetime;
pub mod errors;
pub mod range;
pub mod timestamp;
#[cfg(feature = "serde")]
mod wire;

pub use datetime::EPOCH;
pub use errors::{TimestampError, TimestampRangeError};
pub use range::TimestampRange;
pub use timestamp::UnixTimestamp;
