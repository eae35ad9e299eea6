//! Verdict check.
//!
//! A well formed transcript prints a test's verdict line directly after its
//! announcement line. The check pairs the two with a two-state machine over the
//! combined announcement/verdict sequence:
//!
//! ```text
//! SeekingAnnouncement --(line mentions identifier)--> ExpectVerdictNext
//! ExpectVerdictNext   --(next line has verdict marker)--> Paired
//! ExpectVerdictNext   --(any other line, or end of input)--> Unpaired
//! ```
//!
//! A missing verdict and a verdict separated from its announcement by another
//! test's line both end in `Unpaired` and are reported identically, as a
//! malformed transcript. Only a paired verdict with the wrong keyword is an
//! assertion failure.

use crate::config::TranscriptMarkers;
use crate::error::MatcherError;
use crate::scanner::extract_announcements_and_verdicts;
use crate::traits::transcript_source::TranscriptSource;
use crate::types::Verdict;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PairingState {
    SeekingAnnouncement,
    ExpectVerdictNext { announcement: usize },
}

/// Result of pairing an identifier's announcement with its verdict line.
/// Indices refer to the sequence handed to [`pair_verdict`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Pairing {
    Paired { announcement: usize, verdict: usize },
    Unpaired { announcement: usize },
    NotFound,
}

pub(crate) fn pair_verdict(
    lines: &[&str],
    identifier: &str,
    markers: &TranscriptMarkers,
) -> Pairing {
    let mut state = PairingState::SeekingAnnouncement;

    for (index, line) in lines.iter().enumerate() {
        state = match state {
            PairingState::SeekingAnnouncement if line.contains(identifier) => {
                PairingState::ExpectVerdictNext { announcement: index }
            }
            PairingState::SeekingAnnouncement => continue,
            PairingState::ExpectVerdictNext { announcement } => {
                return if line.contains(&markers.verdict) {
                    Pairing::Paired {
                        announcement,
                        verdict: index,
                    }
                } else {
                    Pairing::Unpaired { announcement }
                };
            }
        };
    }

    match state {
        PairingState::SeekingAnnouncement => Pairing::NotFound,
        PairingState::ExpectVerdictNext { announcement } => Pairing::Unpaired { announcement },
    }
}

/// Verifies the verdict line following `identifier`'s announcement reports `keyword`.
///
/// The keyword is matched literally after the verdict marker, so any token the
/// runner prints can be checked, not only `PASS` and `FAIL`.
///
/// # Errors
///
/// - [`MatcherError::NotFound`] when no line mentions `identifier`.
/// - [`MatcherError::MissingVerdict`] when the next line is absent or is not a
///   verdict line.
/// - [`MatcherError::VerdictMismatch`] (assertion category) when the verdict
///   line carries another keyword.
pub fn assert_verdict<S>(
    transcript: &S,
    keyword: &str,
    identifier: &str,
    markers: &TranscriptMarkers,
) -> Result<(), MatcherError>
where
    S: TranscriptSource + ?Sized,
{
    let lines = extract_announcements_and_verdicts(transcript, markers);
    debug!(identifier, keyword, "checking test verdict");

    match pair_verdict(&lines, identifier, markers) {
        Pairing::NotFound => Err(MatcherError::NotFound(identifier.to_string())),
        Pairing::Unpaired { announcement } => {
            warn!("no verdict directly after '{}'", lines[announcement]);
            Err(MatcherError::MissingVerdict(identifier.to_string()))
        }
        Pairing::Paired { announcement, verdict } => {
            let line = lines[verdict];
            debug!(announcement = lines[announcement], verdict = line, "paired verdict");
            let expected = format!("{} {}", markers.verdict, keyword);
            if line.contains(&expected) {
                Ok(())
            } else {
                Err(MatcherError::VerdictMismatch {
                    identifier: identifier.to_string(),
                    expected: keyword.to_string(),
                    line: line.to_string(),
                })
            }
        }
    }
}

pub fn assert_passed<S>(
    transcript: &S,
    identifier: &str,
    markers: &TranscriptMarkers,
) -> Result<(), MatcherError>
where
    S: TranscriptSource + ?Sized,
{
    assert_verdict(transcript, Verdict::Pass.as_str(), identifier, markers)
}

pub fn assert_failed<S>(
    transcript: &S,
    identifier: &str,
    markers: &TranscriptMarkers,
) -> Result<(), MatcherError>
where
    S: TranscriptSource + ?Sized,
{
    assert_verdict(transcript, Verdict::Fail.as_str(), identifier, markers)
}
