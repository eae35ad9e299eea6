use crate::config::TranscriptMarkers;
use crate::error::MatcherError;
use crate::scanner::{extract_announcements, position_of};
use crate::traits::transcript_source::TranscriptSource;
use tracing::debug;

/// Verifies the announcement of `identifier` carries the ordinal `number/total`.
///
/// The first announcement mentioning `identifier` is used; callers pick
/// identifiers that are not substrings of other test names.
///
/// # Errors
///
/// - [`MatcherError::NotFound`] when no announcement mentions `identifier`.
/// - [`MatcherError::NumberingMismatch`] when the ordinal is absent from that line.
pub fn assert_numbering<S>(
    transcript: &S,
    number: usize,
    total: usize,
    identifier: &str,
    markers: &TranscriptMarkers,
) -> Result<(), MatcherError>
where
    S: TranscriptSource + ?Sized,
{
    let lines = extract_announcements(transcript, markers);
    let index = position_of(&lines, identifier)
        .ok_or_else(|| MatcherError::NotFound(identifier.to_string()))?;

    let line = lines[index];
    let numbering = format!("{number}/{total}");
    debug!(identifier, %numbering, "checking test numbering");

    if line.contains(&numbering) {
        Ok(())
    } else {
        Err(MatcherError::NumberingMismatch {
            numbering,
            line: line.to_string(),
        })
    }
}
