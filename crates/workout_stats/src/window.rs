//! Week-boundary calculation for the analysis window.

use chrono::{DateTime, Datelike, Duration, FixedOffset, NaiveTime};

/// Inclusive start of the analysis window: the most recent Monday at or
/// before `ending` (zero days back when `ending` is itself a Monday), minus
/// `weeks` full 7-day periods, truncated to 00:00:00 in `ending`'s offset.
///
/// `weeks` of zero or less is tolerated and yields a start at or after
/// `ending`, which produces zero buckets downstream. `weeks` values whose
/// span overflows the representable datetime range degrade the same way:
/// the start collapses to `ending` instead of panicking.
pub fn window_start(ending: DateTime<FixedOffset>, weeks: i64) -> DateTime<FixedOffset> {
    let days_back = i64::from(ending.weekday().num_days_from_monday());
    let closest_monday = ending - Duration::days(days_back);
    let Some(start) = Duration::try_weeks(weeks)
        .and_then(|span| closest_monday.checked_sub_signed(span))
    else {
        return ending;
    };
    start - (start.time() - NaiveTime::MIN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, TimeZone, Weekday};

    fn utc() -> FixedOffset {
        FixedOffset::east_opt(0).unwrap()
    }

    #[test]
    fn on_monday() {
        let ending = utc().with_ymd_and_hms(2023, 10, 23, 8, 30, 0).unwrap();
        let expected = utc().with_ymd_and_hms(2023, 10, 2, 0, 0, 0).unwrap();
        assert_eq!(window_start(ending, 3), expected);
    }

    #[test]
    fn before_monday() {
        let ending = utc().with_ymd_and_hms(2023, 10, 20, 8, 30, 0).unwrap();
        let expected = utc().with_ymd_and_hms(2023, 10, 2, 0, 0, 0).unwrap();
        assert_eq!(window_start(ending, 2), expected);
    }

    #[test]
    fn after_monday() {
        let ending = utc().with_ymd_and_hms(2023, 10, 26, 8, 30, 0).unwrap();
        let expected = utc().with_ymd_and_hms(2023, 10, 2, 0, 0, 0).unwrap();
        assert_eq!(window_start(ending, 3), expected);
    }

    #[test]
    fn sunday_goes_back_six_days() {
        let ending = utc().with_ymd_and_hms(2023, 10, 29, 23, 59, 59).unwrap();
        let expected = utc().with_ymd_and_hms(2023, 10, 16, 0, 0, 0).unwrap();
        assert_eq!(window_start(ending, 1), expected);
    }

    #[test]
    fn start_is_always_monday_midnight() {
        for day in 1..=28 {
            let ending = utc().with_ymd_and_hms(2023, 10, day, 17, 45, 12).unwrap();
            for weeks in 1..=4 {
                let start = window_start(ending, weeks);
                assert_eq!(start.weekday(), Weekday::Mon);
                assert_eq!(start.time(), NaiveTime::MIN);
                assert!(start < ending);
            }
        }
    }

    #[test]
    fn truncation_uses_the_reference_offset() {
        let zone = FixedOffset::east_opt(2 * 3600).unwrap();
        let ending = zone.with_ymd_and_hms(2023, 10, 26, 8, 30, 0).unwrap();
        let start = window_start(ending, 3);
        assert_eq!(start, zone.with_ymd_and_hms(2023, 10, 2, 0, 0, 0).unwrap());
        assert_eq!(*start.offset(), zone);
    }

    #[test]
    fn zero_weeks_yields_the_closest_monday() {
        let ending = utc().with_ymd_and_hms(2023, 10, 26, 8, 30, 0).unwrap();
        let expected = utc().with_ymd_and_hms(2023, 10, 23, 0, 0, 0).unwrap();
        assert_eq!(window_start(ending, 0), expected);
    }

    #[test]
    fn negative_weeks_lands_after_the_reference() {
        let ending = utc().with_ymd_and_hms(2023, 10, 26, 8, 30, 0).unwrap();
        assert!(window_start(ending, -1) > ending);
    }

    #[test]
    fn out_of_range_weeks_collapse_to_an_empty_window() {
        let ending = utc().with_ymd_and_hms(2023, 10, 26, 8, 30, 0).unwrap();
        // week span overflows i64 seconds
        assert!(window_start(ending, i64::MAX / 8) >= ending);
        assert!(window_start(ending, i64::MIN / 8) >= ending);
        // span fits in a Duration but leaves the representable datetime range
        assert!(window_start(ending, 5_000_000_000) >= ending);
    }
}
