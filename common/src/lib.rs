//! Ambient pieces shared across the workspace: environment configuration and
//! logger setup.

pub mod config;
pub mod logger;
