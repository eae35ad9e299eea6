//! Failure cause check.
//!
//! After a failing verdict the runner prints one block per failed expectation:
//!
//! ```text
//! Verdict: FAIL
//! --------------------
//! => Cause:
//! Exit code doesn't match.
//! Expected: 0
//! Got: 1
//! ====================
//! ```
//!
//! Cause text (including context dumps) is treated as opaque and compared by
//! substring containment.

use crate::checks::verdict::{Pairing, pair_verdict};
use crate::config::TranscriptMarkers;
use crate::error::MatcherError;
use crate::scanner::LineClass;
use crate::traits::transcript_source::TranscriptSource;
use tracing::debug;

/// Returns every cause block printed after `identifier`'s verdict, in order.
///
/// The verdict must directly follow the announcement, as for
/// [`assert_verdict`](crate::checks::verdict::assert_verdict). A passing test
/// yields an empty list.
pub fn extract_causes<S>(
    transcript: &S,
    identifier: &str,
    markers: &TranscriptMarkers,
) -> Result<Vec<String>, MatcherError>
where
    S: TranscriptSource + ?Sized,
{
    let raw: Vec<&str> = transcript.stdout().lines().collect();
    let tagged: Vec<usize> = raw
        .iter()
        .enumerate()
        .filter(|(_, line)| LineClass::classify(line, markers) != LineClass::Other)
        .map(|(index, _)| index)
        .collect();
    let combined: Vec<&str> = tagged.iter().map(|&index| raw[index]).collect();

    let verdict = match pair_verdict(&combined, identifier, markers) {
        Pairing::Paired { verdict, .. } => tagged[verdict],
        Pairing::Unpaired { .. } => {
            return Err(MatcherError::MissingVerdict(identifier.to_string()));
        }
        Pairing::NotFound => return Err(MatcherError::NotFound(identifier.to_string())),
    };

    let mut causes = Vec::new();
    let mut current: Option<Vec<&str>> = None;

    for &line in &raw[verdict + 1..] {
        let is_boundary = line.contains(&markers.separator)
            || LineClass::classify(line, markers) != LineClass::Other;
        if is_boundary {
            break;
        }
        if line.contains(&markers.cause) {
            if let Some(block) = current.take() {
                causes.push(block.join("\n"));
            }
            current = Some(Vec::new());
        } else if line.contains(&markers.cause_divider) {
            if let Some(block) = current.take() {
                causes.push(block.join("\n"));
            }
        } else if let Some(block) = current.as_mut() {
            block.push(line);
        }
    }

    if let Some(block) = current {
        causes.push(block.join("\n"));
    }

    debug!(identifier, count = causes.len(), "extracted failure causes");
    Ok(causes)
}

/// Verifies one of `identifier`'s cause blocks contains `expected`.
///
/// # Errors
///
/// Structural errors from [`extract_causes`], or [`MatcherError::CauseNotFound`]
/// listing the causes that were printed.
pub fn assert_cause<S>(
    transcript: &S,
    identifier: &str,
    expected: &str,
    markers: &TranscriptMarkers,
) -> Result<(), MatcherError>
where
    S: TranscriptSource + ?Sized,
{
    let causes = extract_causes(transcript, identifier, markers)?;

    if causes.iter().any(|cause| cause.contains(expected)) {
        Ok(())
    } else {
        Err(MatcherError::CauseNotFound {
            identifier: identifier.to_string(),
            expected: expected.to_string(),
            causes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRANSCRIPT: &str = "Testing: /bin/false
====================
Running test (1/3): examples/exit.omtt
Verdict: FAIL
--------------------
=> Cause:
Exit code doesn't match.
Expected: 0
Got: 1
--------------------
=> Cause:
Expected empty output.
Got (context):
h    i
0x68 0x69
====================
Running test (2/3): examples/pass.omtt
Verdict: PASS
====================
Running test (3/3): examples/partial.omtt
Verdict: FAIL
--------------------
=> Cause:
Text not found in output.
====================
3 tests total, 1 passed, 2 failed
";

    fn markers() -> TranscriptMarkers {
        TranscriptMarkers::default()
    }

    #[test]
    fn multiple_causes_are_split_on_divider() {
        let causes = extract_causes(TRANSCRIPT, "exit.omtt", &markers()).unwrap();
        assert_eq!(
            causes,
            vec![
                "Exit code doesn't match.\nExpected: 0\nGot: 1".to_string(),
                "Expected empty output.\nGot (context):\nh    i\n0x68 0x69".to_string(),
            ]
        );
    }

    #[test]
    fn passing_test_has_no_causes() {
        assert!(extract_causes(TRANSCRIPT, "pass.omtt", &markers()).unwrap().is_empty());
    }

    #[test]
    fn causes_stop_at_separator() {
        let causes = extract_causes(TRANSCRIPT, "partial.omtt", &markers()).unwrap();
        assert_eq!(causes, vec!["Text not found in output.".to_string()]);
    }

    #[test]
    fn last_test_without_trailing_separator_keeps_its_cause() {
        let t = "Running test (1/1): a.omtt\nVerdict: FAIL\n--------------------\n=> Cause:\nExit code doesn't match.";
        assert_eq!(
            extract_causes(t, "a.omtt", &markers()).unwrap(),
            vec!["Exit code doesn't match.".to_string()]
        );
    }

    #[test]
    fn assert_cause_matches_substring() {
        assert_eq!(assert_cause(TRANSCRIPT, "exit.omtt", "Got: 1", &markers()), Ok(()));
        assert_eq!(
            assert_cause(TRANSCRIPT, "exit.omtt", "Expected empty output.", &markers()),
            Ok(())
        );
    }

    #[test]
    fn assert_cause_reports_printed_causes() {
        let err = assert_cause(TRANSCRIPT, "partial.omtt", "Exit code", &markers()).unwrap_err();
        assert!(err.is_assertion_failure());
        match err {
            MatcherError::CauseNotFound { causes, .. } => {
                assert_eq!(causes, vec!["Text not found in output.".to_string()]);
            }
            other => panic!("Expected CauseNotFound, got {other:?}"),
        }
    }

    #[test]
    fn structural_errors_come_first() {
        assert_eq!(
            extract_causes(TRANSCRIPT, "missing.omtt", &markers()),
            Err(MatcherError::NotFound("missing.omtt".to_string()))
        );

        let t = "Running test (1/2): a.omtt\nRunning test (2/2): b.omtt\nVerdict: PASS\n";
        assert_eq!(
            extract_causes(t, "a.omtt", &markers()),
            Err(MatcherError::MissingVerdict("a.omtt".to_string()))
        );
    }
}
