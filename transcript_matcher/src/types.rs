//! # Types Module
//!
//! Core data passed into the checks: the captured runner result and the verdict
//! keywords the runner prints.

use std::fmt;
use std::str::FromStr;

/// Captured result of one runner invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunnerResult {
    /// Standard output; this is the transcript every check reads.
    pub stdout: String,
    pub stderr: String,
    /// `None` when the runner was terminated by a signal.
    pub exit_code: Option<i32>,
}

impl RunnerResult {
    pub fn new(stdout: impl Into<String>) -> Self {
        Self {
            stdout: stdout.into(),
            ..Self::default()
        }
    }

    pub fn with_stderr(mut self, stderr: impl Into<String>) -> Self {
        self.stderr = stderr.into();
        self
    }

    pub fn with_exit_code(mut self, code: i32) -> Self {
        self.exit_code = Some(code);
        self
    }
}

/// Outcome keywords printed after `Verdict:`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Pass,
    Fail,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Pass => "PASS",
            Verdict::Fail => "FAIL",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Verdict {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PASS" => Ok(Verdict::Pass),
            "FAIL" => Ok(Verdict::Fail),
            other => Err(format!("Unknown verdict keyword: {other}")),
        }
    }
}
