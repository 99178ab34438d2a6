//! Error mapping from the statistics core to HTTP responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use workout_stats::StatsError;

/// Errors surfaced to HTTP clients by the analyse endpoint.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Stats(#[from] StatsError),

    #[error("'nweeks' must be between 1 and 5200 weeks, got {0}")]
    InvalidWeeks(i64),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Stats(_) | ApiError::InvalidWeeks(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_timestamp_maps_to_bad_request_with_index() {
        let source = chrono::DateTime::parse_from_rfc3339("not-a-date").unwrap_err();
        let err = ApiError::from(StatsError::MalformedTimestamp { index: 3, source });
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert!(err.to_string().contains("workout #3"));
    }

    #[test]
    fn empty_reduction_maps_to_bad_request() {
        let err = ApiError::from(StatsError::EmptyReduction);
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert!(err.to_string().contains("no workout data"));
    }

    #[test]
    fn invalid_weeks_names_the_value() {
        let err = ApiError::InvalidWeeks(-2);
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert!(err.to_string().contains("-2"));
    }
}
