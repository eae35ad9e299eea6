//! Transcript Source Trait
//!
//! Checks accept any value implementing [`TranscriptSource`], so a test can pass
//! the captured result of a runner invocation, an owned `String`, or a literal.
//!
//! # Example
//!
//! ```rust
//! use transcript_matcher::traits::transcript_source::TranscriptSource;
//!
//! struct Captured {
//!     out: String,
//! }
//!
//! impl TranscriptSource for Captured {
//!     fn stdout(&self) -> &str {
//!         &self.out
//!     }
//! }
//!
//! let captured = Captured { out: "Running test (1/1): a.omtt\n".to_string() };
//! assert_eq!(captured.stdout().lines().count(), 1);
//! ```

use crate::types::RunnerResult;

/// Provides the captured standard output of one runner invocation.
pub trait TranscriptSource {
    fn stdout(&self) -> &str;
}

impl TranscriptSource for str {
    fn stdout(&self) -> &str {
        self
    }
}

impl TranscriptSource for String {
    fn stdout(&self) -> &str {
        self.as_str()
    }
}

impl TranscriptSource for RunnerResult {
    fn stdout(&self) -> &str {
        &self.stdout
    }
}

impl<T: TranscriptSource + ?Sized> TranscriptSource for &T {
    fn stdout(&self) -> &str {
        (**self).stdout()
    }
}
