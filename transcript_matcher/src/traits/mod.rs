//!
//! Traits Module
//!
//! - [`transcript_source`]: anything that can hand out a captured runner transcript.

pub mod transcript_source;
