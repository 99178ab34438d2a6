//! Max/median reduction over flat integer lists.

use crate::StatsError;

/// Maximum and median of `values`, computed over an owned descending-sorted
/// copy so the caller's data is never reordered.
///
/// For even-length input the median is the mean of the two central values,
/// rounded half away from zero.
pub fn max_and_median(values: &[i64]) -> Result<(i64, i64), StatsError> {
    if values.is_empty() {
        return Err(StatsError::EmptyReduction);
    }

    let mut sorted = values.to_vec();
    sorted.sort_unstable_by(|a, b| b.cmp(a));

    let max = sorted[0];
    let len = sorted.len();
    let median = if len % 2 == 1 {
        sorted[len / 2]
    } else {
        // sum in i128 so a central pair near i64::MAX cannot overflow
        let sum = i128::from(sorted[len / 2 - 1]) + i128::from(sorted[len / 2]);
        (sum as f64 / 2.0).round() as i64
    };

    Ok((max, median))
}
