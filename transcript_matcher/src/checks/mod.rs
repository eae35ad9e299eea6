//! # Checks
//!
//! Each sub-module verifies one kind of claim about a runner transcript. All of
//! them return `Ok(())` on success and a [`MatcherError`](crate::error::MatcherError)
//! at the first detected problem.
//!
//! - [`order`]: execution order and test count.
//! - [`numbering`]: the `K/N` ordinal of a test.
//! - [`verdict`]: the verdict line paired with a test's announcement.
//! - [`cause`]: the failure causes printed after a verdict.
//! - [`summary`]: the SUT header and the final statistics line.

pub mod cause;
pub mod numbering;
pub mod order;
pub mod summary;
pub mod verdict;
