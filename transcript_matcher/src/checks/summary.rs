//! Run summary checks: the `Testing: <path>` header printed before the first test
//! and the statistics line printed after the last one.

use crate::config::TranscriptMarkers;
use crate::error::MatcherError;
use crate::traits::transcript_source::TranscriptSource;
use regex::Regex;
use tracing::debug;

/// Verifies the SUT header names `expected_path`.
pub fn assert_sut_path<S>(
    transcript: &S,
    expected_path: &str,
    markers: &TranscriptMarkers,
) -> Result<(), MatcherError>
where
    S: TranscriptSource + ?Sized,
{
    let header = transcript
        .stdout()
        .lines()
        .find(|line| line.contains(&markers.sut_header))
        .ok_or_else(|| MatcherError::NotFound(markers.sut_header.clone()))?;

    if header.contains(expected_path) {
        Ok(())
    } else {
        Err(MatcherError::SutPathMismatch {
            expected: expected_path.to_string(),
            line: header.to_string(),
        })
    }
}

/// Verifies the final statistics line reports exactly `total`, `passed` and `failed`.
///
/// The line is found with the `statistics` marker, a pattern whose first three
/// capture groups are the total, passed and failed counts. When the transcript
/// carries several statistics lines the last one counts.
///
/// # Errors
///
/// - [`MatcherError::InvalidPattern`] when the marker does not compile or has
///   fewer than three capture groups.
/// - [`MatcherError::NotFound`] when no line matches the marker.
/// - [`MatcherError::StatisticsMismatch`] (assertion category) when the counts differ.
pub fn assert_statistics<S>(
    transcript: &S,
    total: usize,
    passed: usize,
    failed: usize,
    markers: &TranscriptMarkers,
) -> Result<(), MatcherError>
where
    S: TranscriptSource + ?Sized,
{
    let statistics_regex = Regex::new(&markers.statistics)
        .map_err(|e| MatcherError::InvalidPattern(format!("Failed to compile regex: {e}")))?;
    if statistics_regex.captures_len() < 4 {
        return Err(MatcherError::InvalidPattern(format!(
            "Statistics pattern '{}' needs three capture groups",
            markers.statistics
        )));
    }

    let (line, counts) = transcript
        .stdout()
        .lines()
        .filter_map(|line| {
            let captures = statistics_regex.captures(line)?;
            let count = |i: usize| captures.get(i).and_then(|m| m.as_str().parse::<usize>().ok());
            Some((line, (count(1), count(2), count(3))))
        })
        .last()
        .ok_or_else(|| MatcherError::NotFound(markers.statistics.clone()))?;

    debug!(line, "checking run statistics");

    if counts == (Some(total), Some(passed), Some(failed)) {
        Ok(())
    } else {
        Err(MatcherError::StatisticsMismatch {
            expected: format!("{total} tests total, {passed} passed, {failed} failed"),
            line: line.to_string(),
        })
    }
}
