//! Matcher Error Types
//!
//! This module defines [`MatcherError`], returned by every transcript check and by
//! configuration loading. Each variant carries the values needed to diagnose the
//! failure without re-reading the transcript.
//!
//! Failures fall into three categories, exposed through [`MatcherError::kind`]:
//!
//! - [`FailureKind::Structural`]: the transcript does not contain what the check
//!   needs (missing test, wrong count, broken announcement/verdict pairing).
//! - [`FailureKind::Assertion`]: the transcript is well formed but reports a
//!   different outcome than expected.
//! - [`FailureKind::Config`]: the matcher configuration could not be loaded.
//!
//! # Example
//!
//! ```rust
//! use transcript_matcher::error::{FailureKind, MatcherError};
//!
//! let err = MatcherError::NotFound("some_test.omtt".to_string());
//! assert_eq!(err.kind(), FailureKind::Structural);
//! assert_eq!(err.to_string(), "Test some_test.omtt not found.");
//! ```

/// Category of a [`MatcherError`], used by callers instead of message parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Structural,
    Assertion,
    Config,
}

/// Represents all errors raised by the transcript checks.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum MatcherError {
    /// No line of the relevant sequence mentions the identifier.
    #[error("Test {0} not found.")]
    NotFound(String),

    /// The announcement count differs from the expected identifier count.
    #[error("Can't check order, unequal lengths.\nExpected: {expected:?}\nGot: {actual:?}")]
    LengthMismatch {
        expected: Vec<String>,
        actual: Vec<String>,
    },

    /// An announcement line does not carry the identifier expected at its position.
    #[error("Wrong order, expected: '{expected}'; got line with: '{line}'")]
    OrderMismatch {
        position: usize,
        expected: String,
        line: String,
    },

    /// The announcement line lacks the expected `K/N` ordinal.
    #[error("Wrong (or missing) number ({numbering}) in line: '{line}'")]
    NumberingMismatch { numbering: String, line: String },

    /// The announcement is not immediately followed by a verdict line.
    #[error("Test verdict (for {0}) not found.")]
    MissingVerdict(String),

    /// The verdict line reports a different keyword.
    #[error("Verdict mismatch for {identifier}: expected 'Verdict: {expected}'; got line: '{line}'")]
    VerdictMismatch {
        identifier: String,
        expected: String,
        line: String,
    },

    /// None of the cause blocks of the test contains the expected text.
    #[error("Cause not found for {identifier}.\nExpected:\n{expected}\nGot: {causes:?}")]
    CauseNotFound {
        identifier: String,
        expected: String,
        causes: Vec<String>,
    },

    /// The SUT header names a different program.
    #[error("Wrong SUT path, expected: '{expected}'; got line: '{line}'")]
    SutPathMismatch { expected: String, line: String },

    /// The final statistics line reports different counts.
    #[error("Wrong statistics, expected: '{expected}'; got line: '{line}'")]
    StatisticsMismatch { expected: String, line: String },

    /// I/O error while reading or writing a configuration file.
    #[error("I/O error: {0}")]
    IoError(String),

    /// A configuration file is not valid JSON or does not match the schema.
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    /// A line pattern failed to compile.
    #[error("Invalid pattern: {0}")]
    InvalidPattern(String),
}

impl MatcherError {
    pub fn kind(&self) -> FailureKind {
        match self {
            MatcherError::VerdictMismatch { .. }
            | MatcherError::CauseNotFound { .. }
            | MatcherError::SutPathMismatch { .. }
            | MatcherError::StatisticsMismatch { .. } => FailureKind::Assertion,
            MatcherError::IoError(_)
            | MatcherError::InvalidJson(_)
            | MatcherError::InvalidPattern(_) => FailureKind::Config,
            _ => FailureKind::Structural,
        }
    }

    /// Shorthand for `kind() == FailureKind::Assertion`.
    pub fn is_assertion_failure(&self) -> bool {
        self.kind() == FailureKind::Assertion
    }
}
