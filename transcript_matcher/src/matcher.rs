//! [`TranscriptMatcher`] bundles a [`MatcherConfig`] with every check so a test
//! suite running against a customised runner configures the markers once.

use crate::checks::{cause, numbering, order, summary, verdict};
use crate::config::MatcherConfig;
use crate::error::MatcherError;
use crate::scanner;
use crate::traits::transcript_source::TranscriptSource;
use crate::types::Verdict;

#[derive(Debug, Clone, Default)]
pub struct TranscriptMatcher {
    config: MatcherConfig,
}

impl TranscriptMatcher {
    pub fn new() -> Self {
        Self {
            config: MatcherConfig::default_config(),
        }
    }

    /// Replace the configuration (markers) used by every check.
    pub fn with_config(mut self, config: MatcherConfig) -> Self {
        self.config = config;
        self
    }

    /// Builds a matcher from [`MatcherConfig::load`].
    pub fn from_env() -> Result<Self, MatcherError> {
        Ok(Self::new().with_config(MatcherConfig::load()?))
    }

    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    pub fn announcements<'t, S>(&self, transcript: &'t S) -> Vec<&'t str>
    where
        S: TranscriptSource + ?Sized,
    {
        scanner::extract_announcements(transcript, &self.config.markers)
    }

    pub fn announcements_and_verdicts<'t, S>(&self, transcript: &'t S) -> Vec<&'t str>
    where
        S: TranscriptSource + ?Sized,
    {
        scanner::extract_announcements_and_verdicts(transcript, &self.config.markers)
    }

    pub fn assert_order<S, I>(&self, transcript: &S, expected: &[I]) -> Result<(), MatcherError>
    where
        S: TranscriptSource + ?Sized,
        I: AsRef<str>,
    {
        order::assert_order(transcript, expected, &self.config.markers)
    }

    pub fn assert_numbering<S>(
        &self,
        transcript: &S,
        number: usize,
        total: usize,
        identifier: &str,
    ) -> Result<(), MatcherError>
    where
        S: TranscriptSource + ?Sized,
    {
        numbering::assert_numbering(transcript, number, total, identifier, &self.config.markers)
    }

    pub fn assert_verdict<S>(
        &self,
        transcript: &S,
        keyword: &str,
        identifier: &str,
    ) -> Result<(), MatcherError>
    where
        S: TranscriptSource + ?Sized,
    {
        verdict::assert_verdict(transcript, keyword, identifier, &self.config.markers)
    }

    pub fn assert_passed<S>(&self, transcript: &S, identifier: &str) -> Result<(), MatcherError>
    where
        S: TranscriptSource + ?Sized,
    {
        self.assert_verdict(transcript, Verdict::Pass.as_str(), identifier)
    }

    pub fn assert_failed<S>(&self, transcript: &S, identifier: &str) -> Result<(), MatcherError>
    where
        S: TranscriptSource + ?Sized,
    {
        self.assert_verdict(transcript, Verdict::Fail.as_str(), identifier)
    }

    pub fn causes<S>(&self, transcript: &S, identifier: &str) -> Result<Vec<String>, MatcherError>
    where
        S: TranscriptSource + ?Sized,
    {
        cause::extract_causes(transcript, identifier, &self.config.markers)
    }

    pub fn assert_cause<S>(
        &self,
        transcript: &S,
        identifier: &str,
        expected: &str,
    ) -> Result<(), MatcherError>
    where
        S: TranscriptSource + ?Sized,
    {
        cause::assert_cause(transcript, identifier, expected, &self.config.markers)
    }

    pub fn assert_sut_path<S>(
        &self,
        transcript: &S,
        expected_path: &str,
    ) -> Result<(), MatcherError>
    where
        S: TranscriptSource + ?Sized,
    {
        summary::assert_sut_path(transcript, expected_path, &self.config.markers)
    }

    pub fn assert_statistics<S>(
        &self,
        transcript: &S,
        total: usize,
        passed: usize,
        failed: usize,
    ) -> Result<(), MatcherError>
    where
        S: TranscriptSource + ?Sized,
    {
        summary::assert_statistics(transcript, total, passed, failed, &self.config.markers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TranscriptMarkers;

    #[test]
    fn custom_markers_flow_through_every_check() {
        let matcher = TranscriptMatcher::new().with_config(MatcherConfig {
            markers: TranscriptMarkers {
                announcement: "Executing".to_string(),
                verdict: "Outcome:".to_string(),
                ..TranscriptMarkers::default()
            },
        });
        let t = "Executing (1/1): solo.omtt\nOutcome: PASS\n";

        assert_eq!(matcher.announcements(t), vec!["Executing (1/1): solo.omtt"]);
        assert_eq!(matcher.assert_order(t, &["solo.omtt"]), Ok(()));
        assert_eq!(matcher.assert_numbering(t, 1, 1, "solo.omtt"), Ok(()));
        assert_eq!(matcher.assert_passed(t, "solo.omtt"), Ok(()));
        assert!(matcher.assert_failed(t, "solo.omtt").unwrap_err().is_assertion_failure());
    }

    #[test]
    fn statistics_follow_configured_marker() {
        let matcher = TranscriptMatcher::new().with_config(MatcherConfig {
            markers: TranscriptMarkers {
                statistics: r"ran (\d+): (\d+) ok, (\d+) failed".to_string(),
                ..TranscriptMarkers::default()
            },
        });
        let t = "Running test (1/1): solo.omtt\nVerdict: PASS\nran 1: 1 ok, 0 failed\n";

        assert_eq!(matcher.assert_statistics(t, 1, 1, 0), Ok(()));
        assert!(matcher.assert_statistics(t, 1, 0, 1).unwrap_err().is_assertion_failure());
    }

    #[test]
    fn default_matcher_uses_runner_markers() {
        let matcher = TranscriptMatcher::default();
        assert_eq!(matcher.config(), &MatcherConfig::default_config());
    }
}
