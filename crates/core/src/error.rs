// src/error.rs
//! Error types for tracker construction and updates.

use thiserror::Error;
use tocspy_traits::DocumentError;

/// Rejected tracker configuration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Invalid proximity band ({top}, {bottom}): {reason}")]
    InvalidBand { top: f64, bottom: f64, reason: &'static str },
    #[error("Configuration field '{0}' must not be empty")]
    EmptyField(&'static str),
    #[error("Configuration could not be parsed: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e.to_string())
    }
}

/// The main error enum for a tracker update.
///
/// A missing navigation link is not an error; it is reported through
/// `UpdateOutcome::LinkMissing`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TrackerError {
    #[error("Document access failed: {0}")]
    Document(#[from] DocumentError),
}
