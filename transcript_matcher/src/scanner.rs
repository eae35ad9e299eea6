//!
//! Transcript Scanner
//!
//! Splits a runner transcript into lines and filters them by marker containment.
//! Lines are kept as opaque text: the scanner never parses ordinals, paths or
//! verdicts out of a line, it only asks whether a marker occurs in it. This keeps
//! the checks indifferent to formatting around the markers.
//!
//! Every call rescans the transcript; nothing is cached between calls.

use crate::config::TranscriptMarkers;
use crate::traits::transcript_source::TranscriptSource;

/// Classification of a single transcript line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass {
    /// Contains the announcement marker.
    Announcement,
    /// Contains the verdict marker (and not the announcement marker).
    Verdict,
    Other,
}

impl LineClass {
    /// Announcement wins when a line carries both markers.
    pub fn classify(line: &str, markers: &TranscriptMarkers) -> Self {
        if line.contains(&markers.announcement) {
            LineClass::Announcement
        } else if line.contains(&markers.verdict) {
            LineClass::Verdict
        } else {
            LineClass::Other
        }
    }
}

/// Lines announcing the start of a test, in transcript order.
pub fn extract_announcements<'t, S>(transcript: &'t S, markers: &TranscriptMarkers) -> Vec<&'t str>
where
    S: TranscriptSource + ?Sized,
{
    transcript
        .stdout()
        .lines()
        .filter(|line| LineClass::classify(line, markers) == LineClass::Announcement)
        .collect()
}

/// Announcement and verdict lines interleaved, in transcript order.
pub fn extract_announcements_and_verdicts<'t, S>(
    transcript: &'t S,
    markers: &TranscriptMarkers,
) -> Vec<&'t str>
where
    S: TranscriptSource + ?Sized,
{
    transcript
        .stdout()
        .lines()
        .filter(|line| LineClass::classify(line, markers) != LineClass::Other)
        .collect()
}

/// Index of the first line mentioning `identifier`. First match wins.
pub(crate) fn position_of(lines: &[&str], identifier: &str) -> Option<usize> {
    lines.iter().position(|line| line.contains(identifier))
}
