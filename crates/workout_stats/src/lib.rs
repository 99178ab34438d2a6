//! Workout statistics core: week windowing, bucket aggregation and
//! max/median reduction over in-memory workout lists.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod aggregate;
pub mod reduce;
pub mod window;

pub use aggregate::{WeekBucket, aggregate, build_buckets};
pub use reduce::max_and_median;
pub use window::window_start;

#[derive(Debug, Error)]
pub enum StatsError {
    #[error("invalid timestamp at workout #{index}: {source}")]
    MalformedTimestamp {
        index: usize,
        source: chrono::ParseError,
    },
    #[error("no workout data within the analysis window")]
    EmptyReduction,
}

/// A single workout record as it arrives on the wire.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct Workout {
    pub distance: i64,
    #[serde(rename = "time")]
    pub duration: i64,
    pub timestamp: String,
}

impl Workout {
    /// Parse the RFC 3339 timestamp (fractional seconds allowed) into an
    /// instant, keeping the record's own offset.
    pub fn instant(&self) -> Result<DateTime<FixedOffset>, chrono::ParseError> {
        DateTime::parse_from_rfc3339(&self.timestamp)
    }
}

/// Aggregate output of one analysis run. Field names match the wire format.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct OverallStatistics {
    #[serde(rename = "medium_distance")]
    pub median_distance: i64,
    #[serde(rename = "medium_time")]
    pub median_duration: i64,
    #[serde(rename = "max_distance")]
    pub max_distance: i64,
    #[serde(rename = "max_time")]
    pub max_duration: i64,
    #[serde(rename = "medium_weekly_distance")]
    pub median_weekly_distance: i64,
    #[serde(rename = "medium_weekly_time")]
    pub median_weekly_duration: i64,
    #[serde(rename = "max_weekly_distance")]
    pub max_weekly_distance: i64,
    #[serde(rename = "max_weekly_time")]
    pub max_weekly_duration: i64,
}
