//! Execution order check.
//!
//! Matching is substring containment rather than equality: an announcement line
//! carries the ordinal and a path prefix around the bare test file name, and the
//! expectation should not have to reproduce that formatting.

use crate::config::TranscriptMarkers;
use crate::error::MatcherError;
use crate::scanner::extract_announcements;
use crate::traits::transcript_source::TranscriptSource;
use tracing::{debug, warn};

/// Verifies the transcript announces exactly `expected` tests, in that order.
///
/// # Errors
///
/// - [`MatcherError::LengthMismatch`] when the number of announcements differs.
/// - [`MatcherError::OrderMismatch`] at the first position whose line does not
///   contain the expected identifier.
pub fn assert_order<S, I>(
    transcript: &S,
    expected: &[I],
    markers: &TranscriptMarkers,
) -> Result<(), MatcherError>
where
    S: TranscriptSource + ?Sized,
    I: AsRef<str>,
{
    let lines = extract_announcements(transcript, markers);
    debug!(announced = lines.len(), expected = expected.len(), "checking execution order");

    if lines.len() != expected.len() {
        warn!("announcement count {} differs from expected {}", lines.len(), expected.len());
        return Err(MatcherError::LengthMismatch {
            expected: expected.iter().map(|e| e.as_ref().to_string()).collect(),
            actual: lines.iter().map(|l| l.to_string()).collect(),
        });
    }

    for (position, (line, test)) in lines.iter().zip(expected.iter()).enumerate() {
        if !line.contains(test.as_ref()) {
            return Err(MatcherError::OrderMismatch {
                position,
                expected: test.as_ref().to_string(),
                line: line.to_string(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIRST: &str = "cat-will-exit-with-zero.omtt";
    const SECOND: &str = "cat-will_match_part_of_output.omtt";

    fn transcript() -> String {
        format!(
            "
Testing: /bin/cat
====================
Running test (1/2): examples/{FIRST}
Verdict: PASS
====================
Running test (2/2): examples/{SECOND}
Verdict: PASS
"
        )
    }

    #[test]
    fn matching_order_passes() {
        let t = transcript();
        assert_eq!(assert_order(&t, &[FIRST, SECOND], &TranscriptMarkers::default()), Ok(()));
    }

    #[test]
    fn wrong_first_position_reports_actual_line() {
        let t = transcript();
        let err = assert_order(&t, &[SECOND, FIRST], &TranscriptMarkers::default()).unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("Wrong order, expected: '{SECOND}'; got line with: 'Running test (1/2): examples/{FIRST}'")
        );
        assert!(matches!(err, MatcherError::OrderMismatch { position: 0, .. }));
    }

    #[test]
    fn wrong_later_position_reports_that_position() {
        let t = transcript();
        let err = assert_order(&t, &[FIRST, FIRST], &TranscriptMarkers::default()).unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("Wrong order, expected: '{FIRST}'; got line with: 'Running test (2/2): examples/{SECOND}'")
        );
        assert!(matches!(err, MatcherError::OrderMismatch { position: 1, .. }));
    }

    #[test]
    fn longer_expectation_is_length_mismatch() {
        let t = transcript();
        let err = assert_order(&t, &[FIRST, SECOND, SECOND], &TranscriptMarkers::default())
            .unwrap_err();
        assert!(err.to_string().contains("Can't check order, unequal lengths."));
    }

    #[test]
    fn shorter_expectation_is_length_mismatch_regardless_of_content() {
        let t = transcript();
        let err =
            assert_order(&t, &["nothing-like-it"], &TranscriptMarkers::default()).unwrap_err();
        match err {
            MatcherError::LengthMismatch { expected, actual } => {
                assert_eq!(expected, vec!["nothing-like-it"]);
                assert_eq!(actual.len(), 2);
            }
            other => panic!("Expected LengthMismatch, got {other:?}"),
        }
    }

    #[test]
    fn empty_transcript_and_expectation_agree() {
        let empty: [&str; 0] = [];
        assert_eq!(assert_order("", &empty, &TranscriptMarkers::default()), Ok(()));
    }

    #[test]
    fn owned_identifiers_are_accepted() {
        let t = transcript();
        let order = vec![FIRST.to_string(), SECOND.to_string()];
        assert!(assert_order(&t, &order, &TranscriptMarkers::default()).is_ok());
    }
}
