use chrono::{DateTime, Utc};
use proptest::prelude::*;
use unix_timestamp::UnixTimestamp;

pub(crate) fn any_timestamp() -> impl Strategy<Value = UnixTimestamp> {
    any::<i64>().prop_map(UnixTimestamp::new)
}

/// Seconds that chrono can represent, both bounds included.
pub(crate) fn representable_secs() -> impl Strategy<Value = i64> {
    DateTime::<Utc>::MIN_UTC.timestamp()..=DateTime::<Utc>::MAX_UTC.timestamp()
}

/// Mostly in-range seconds, with a share of arbitrary `i64`s that fall past
/// either bound.
pub(crate) fn mixed_secs() -> impl Strategy<Value = i64> {
    prop_oneof![3 => representable_secs(), 1 => any::<i64>()]
}

pub(crate) fn any_datetime() -> impl Strategy<Value = DateTime<Utc>> {
    (representable_secs(), 0..1_000_000_000_u32).prop_filter_map(
        "instant past MAX_UTC",
        |(secs, nanos)| DateTime::from_timestamp(secs, nanos),
    )
}
