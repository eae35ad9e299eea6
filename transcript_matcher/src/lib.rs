//! # Transcript Matcher
//!
//! Verification helpers for system tests of a command-line test runner. The
//! runner executes `.omtt` test files against a program and prints a transcript:
//!
//! ```text
//! Testing: /bin/cat
//! ====================
//! Running test (1/2): examples/cat-will-exit-with-zero.omtt
//! Verdict: PASS
//! ====================
//! Running test (2/2): examples/cat-will_match_part_of_output.omtt
//! Verdict: PASS
//! ====================
//! 2 tests total, 2 passed, 0 failed
//! ```
//!
//! The functions in this crate read such a transcript and check claims about it:
//! which tests ran and in what order, the ordinal each one was given, the verdict
//! printed for it and why it failed. They never execute anything.
//!
//! ## Key Concepts
//! - **Announcement line**: contains `Running test`, an ordinal `K/N` and the test path.
//! - **Verdict line**: contains `Verdict:` and the outcome keyword; it must directly
//!   follow its announcement among announcement and verdict lines.
//! - **Identifier**: the test file name, matched by substring containment.
//!
//! The free functions below use the runner's default markers. Use
//! [`TranscriptMatcher`] to check transcripts printed with other markers.
//!
//! ```rust
//! use transcript_matcher::{assert_numbering, assert_order, assert_passed};
//!
//! let stdout = "Running test (1/2): examples/a.omtt\nVerdict: PASS\n\
//!               Running test (2/2): examples/b.omtt\nVerdict: FAIL\n";
//!
//! assert!(assert_order(stdout, &["a.omtt", "b.omtt"]).is_ok());
//! assert!(assert_numbering(stdout, 2, 2, "b.omtt").is_ok());
//! assert!(assert_passed(stdout, "b.omtt").unwrap_err().is_assertion_failure());
//! ```

pub mod checks;
pub mod config;
pub mod error;
pub mod matcher;
pub mod scanner;
pub mod traits;
pub mod types;

pub use crate::error::{FailureKind, MatcherError};
pub use crate::matcher::TranscriptMatcher;
pub use crate::traits::transcript_source::TranscriptSource;
pub use crate::types::{RunnerResult, Verdict};

use crate::config::TranscriptMarkers;

/// Announcement lines of `transcript`, in order.
pub fn extract_announcements<S>(transcript: &S) -> Vec<&str>
where
    S: TranscriptSource + ?Sized,
{
    scanner::extract_announcements(transcript, &TranscriptMarkers::default())
}

/// Announcement and verdict lines of `transcript`, interleaved in order.
pub fn extract_announcements_and_verdicts<S>(transcript: &S) -> Vec<&str>
where
    S: TranscriptSource + ?Sized,
{
    scanner::extract_announcements_and_verdicts(transcript, &TranscriptMarkers::default())
}

/// See [`checks::order::assert_order`].
pub fn assert_order<S, I>(transcript: &S, expected: &[I]) -> Result<(), MatcherError>
where
    S: TranscriptSource + ?Sized,
    I: AsRef<str>,
{
    checks::order::assert_order(transcript, expected, &TranscriptMarkers::default())
}

/// See [`checks::numbering::assert_numbering`].
pub fn assert_numbering<S>(
    transcript: &S,
    number: usize,
    total: usize,
    identifier: &str,
) -> Result<(), MatcherError>
where
    S: TranscriptSource + ?Sized,
{
    let markers = TranscriptMarkers::default();
    checks::numbering::assert_numbering(transcript, number, total, identifier, &markers)
}

/// See [`checks::verdict::assert_verdict`].
pub fn assert_verdict<S>(
    transcript: &S,
    keyword: &str,
    identifier: &str,
) -> Result<(), MatcherError>
where
    S: TranscriptSource + ?Sized,
{
    checks::verdict::assert_verdict(transcript, keyword, identifier, &TranscriptMarkers::default())
}

pub fn assert_passed<S>(transcript: &S, identifier: &str) -> Result<(), MatcherError>
where
    S: TranscriptSource + ?Sized,
{
    checks::verdict::assert_passed(transcript, identifier, &TranscriptMarkers::default())
}

pub fn assert_failed<S>(transcript: &S, identifier: &str) -> Result<(), MatcherError>
where
    S: TranscriptSource + ?Sized,
{
    checks::verdict::assert_failed(transcript, identifier, &TranscriptMarkers::default())
}

/// See [`checks::cause::extract_causes`].
pub fn extract_causes<S>(transcript: &S, identifier: &str) -> Result<Vec<String>, MatcherError>
where
    S: TranscriptSource + ?Sized,
{
    checks::cause::extract_causes(transcript, identifier, &TranscriptMarkers::default())
}

pub fn assert_cause<S>(
    transcript: &S,
    identifier: &str,
    expected: &str,
) -> Result<(), MatcherError>
where
    S: TranscriptSource + ?Sized,
{
    checks::cause::assert_cause(transcript, identifier, expected, &TranscriptMarkers::default())
}

pub fn assert_sut_path<S>(transcript: &S, expected_path: &str) -> Result<(), MatcherError>
where
    S: TranscriptSource + ?Sized,
{
    checks::summary::assert_sut_path(transcript, expected_path, &TranscriptMarkers::default())
}

pub fn assert_statistics<S>(
    transcript: &S,
    total: usize,
    passed: usize,
    failed: usize,
) -> Result<(), MatcherError>
where
    S: TranscriptSource + ?Sized,
{
    let markers = TranscriptMarkers::default();
    checks::summary::assert_statistics(transcript, total, passed, failed, &markers)
}
