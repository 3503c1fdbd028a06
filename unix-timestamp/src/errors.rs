use std::num::ParseIntError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimestampError {
    #[error("could not parse timestamp string {input:?}: {source}")]
    Parse {
        input: String,
        #[source]
        source: ParseIntError,
    },
    #[error("timestamp {0} is outside the representable datetime range")]
    OutOfRange(i64),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimestampRangeError {
    #[error("Start timestamp is after end timestamp")]
    StartAfterEnd,
    #[error("End timestamp is in the future")]
    EndInFuture,
    #[error("Start timestamp equals end timestamp")]
    StartEqualsEnd,
    #[error("Expected format: start,end (got {0:?})")]
    MissingSeparator(String),
    #[error("Invalid range bound: {0}")]
    InvalidBound(#[from] TimestampError),
}
