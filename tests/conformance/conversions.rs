use chrono::{DateTime, NaiveDate, TimeDelta, Utc};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;
use unix_timestamp::{EPOCH, UnixTimestamp};

use crate::common::{any_datetime, mixed_secs, representable_secs};

fn max_secs() -> i64 {
    DateTime::<Utc>::MAX_UTC.timestamp()
}

fn min_secs() -> i64 {
    DateTime::<Utc>::MIN_UTC.timestamp()
}

#[test]
fn epoch_is_first_instant_of_1970() {
    let expected = NaiveDate::from_ymd_opt(1970, 1, 1)
        .and_then(|d| d.and_hms_milli_opt(0, 0, 0, 0))
        .unwrap()
        .and_utc();
    assert_eq!(EPOCH, expected);
}

#[rstest]
#[case::max(DateTime::<Utc>::MAX_UTC)]
#[case::min(DateTime::<Utc>::MIN_UTC)]
fn datetime_bounds_round_trip(#[case] bound: DateTime<Utc>) {
    let ts = UnixTimestamp::from(bound);
    assert_eq!(DateTime::<Utc>::from(ts), bound);
    assert_eq!(ts.to_datetime(), bound);
}

proptest! {
    #[test]
    fn to_datetime_adds_seconds_to_epoch(secs in mixed_secs()) {
        let actual = UnixTimestamp::new(secs).to_datetime();
        if secs >= max_secs() {
            prop_assert_eq!(actual, DateTime::<Utc>::MAX_UTC);
        } else if secs <= min_secs() {
            prop_assert_eq!(actual, DateTime::<Utc>::MIN_UTC);
        } else {
            let delta = TimeDelta::try_seconds(secs).unwrap();
            prop_assert_eq!(actual, EPOCH + delta);
            prop_assert_eq!(DateTime::<Utc>::from(UnixTimestamp::new(secs)), EPOCH + delta);
        }
    }

    #[test]
    fn in_range_seconds_round_trip(secs in representable_secs()) {
        let ts = UnixTimestamp::new(secs);
        prop_assert_eq!(UnixTimestamp::from_datetime(ts.to_datetime()), ts);
        prop_assert_eq!(UnixTimestamp::from(ts.to_naive_datetime()), ts);
    }

    #[test]
    fn strict_conversion_matches_in_range(secs in mixed_secs()) {
        let ts = UnixTimestamp::new(secs);
        match ts.try_to_datetime() {
            Ok(dt) => prop_assert_eq!(UnixTimestamp::from(dt), ts),
            Err(_) => prop_assert!(secs > max_secs() || secs < min_secs()),
        }
    }

    #[test]
    fn explicit_conversion_matches_from_datetime(dt in any_datetime()) {
        prop_assert_eq!(UnixTimestamp::from_datetime(dt), UnixTimestamp::from(dt));
    }

    #[test]
    fn from_datetime_drops_sub_second_part(dt in any_datetime()) {
        let secs = UnixTimestamp::from_datetime(dt).secs_since_epoch();
        let whole = TimeDelta::try_seconds(secs).unwrap();
        let remainder = (dt - EPOCH) - whole;
        prop_assert!(remainder.abs() < TimeDelta::try_seconds(1).unwrap());
        prop_assert!(remainder.is_zero() || (remainder > TimeDelta::zero()) == (dt > EPOCH));
    }
}
