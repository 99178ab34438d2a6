//! Week-bucket aggregation of workout lists.

use chrono::{DateTime, Duration, FixedOffset};

use crate::reduce::max_and_median;
use crate::window::window_start;
use crate::{OverallStatistics, StatsError, Workout};

/// One 7-day sub-interval of the analysis window with its accumulated
/// totals. `end` is the last representable instant before the next bucket's
/// start, so the covered interval is effectively `[start, start + 7d)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WeekBucket {
    pub start: DateTime<FixedOffset>,
    pub end: DateTime<FixedOffset>,
    pub distance: i64,
    pub duration: i64,
}

/// Build the ordered, contiguous bucket sequence covering `[start, ending)`.
/// The final bucket may extend past `ending`; no bucket starts at or after it.
pub fn build_buckets(start: DateTime<FixedOffset>, ending: DateTime<FixedOffset>) -> Vec<WeekBucket> {
    let mut buckets = Vec::new();
    let mut day = start;
    while day < ending {
        buckets.push(WeekBucket {
            start: day,
            end: day + Duration::weeks(1) - Duration::nanoseconds(1),
            distance: 0,
            duration: 0,
        });
        day += Duration::weeks(1);
    }
    buckets
}

/// Compute the overall statistics for `workouts` over the `weeks`-week
/// window ending at `ending`.
///
/// Any unparseable timestamp aborts the whole run with the offending
/// workout's ordinal index; workouts outside every bucket are excluded from
/// all eight figures. An empty window (or one containing no workouts at
/// all) yields [`StatsError::EmptyReduction`].
pub fn aggregate(
    ending: DateTime<FixedOffset>,
    weeks: i64,
    workouts: &[Workout],
) -> Result<OverallStatistics, StatsError> {
    let mut buckets = build_buckets(window_start(ending, weeks), ending);

    let mut distances = Vec::new();
    let mut durations = Vec::new();
    for (index, workout) in workouts.iter().enumerate() {
        let instant = workout
            .instant()
            .map_err(|source| StatsError::MalformedTimestamp { index, source })?;

        // Membership is strict on both ends: an instant exactly on a bucket
        // start (or in the final nanosecond before the next one) belongs to
        // no bucket and is dropped from every statistic.
        let Some(bucket) = buckets
            .iter_mut()
            .find(|bucket| instant > bucket.start && instant < bucket.end)
        else {
            continue;
        };

        bucket.distance += workout.distance;
        bucket.duration += workout.duration;
        distances.push(workout.distance);
        durations.push(workout.duration);
    }

    let weekly_distances: Vec<i64> = buckets.iter().map(|bucket| bucket.distance).collect();
    let weekly_durations: Vec<i64> = buckets.iter().map(|bucket| bucket.duration).collect();

    let (max_distance, median_distance) = max_and_median(&distances)?;
    let (max_duration, median_duration) = max_and_median(&durations)?;
    let (max_weekly_distance, median_weekly_distance) = max_and_median(&weekly_distances)?;
    let (max_weekly_duration, median_weekly_duration) = max_and_median(&weekly_durations)?;

    Ok(OverallStatistics {
        median_distance,
        median_duration,
        max_distance,
        max_duration,
        median_weekly_distance,
        median_weekly_duration,
        max_weekly_distance,
        max_weekly_duration,
    })
}
