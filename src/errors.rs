//! Error types for the tablature editor
//!
//! Core tablature operations cannot fail. These errors only come from the
//! boundaries: labels arriving from JavaScript and fingering configuration.

use thiserror::Error;

/// Top-level tablature editor error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TabError {
    #[error("Unknown string: '{0}' (expected 1G-6G or 1D-6D)")]
    UnknownString(String),

    #[error("Unknown finger mode: '{0}' (expected auto, thumb or index)")]
    UnknownFingerMode(String),

    #[error("Unknown rhythm symbol: '{0}' (expected +, ♪, ♫ or ♬)")]
    UnknownRhythm(String),

    #[error("Unknown tool: '{0}'")]
    UnknownTool(String),

    /// Fingering table could not be parsed or is incomplete
    #[error("Invalid fingering configuration: {0}")]
    Config(String),

    #[error("No active tablature session (call createSession first)")]
    NoSession,
}

impl From<serde_yaml::Error> for TabError {
    fn from(err: serde_yaml::Error) -> Self {
        TabError::Config(err.to_string())
    }
}
