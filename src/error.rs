//! Crate-level error types.

use std::fmt;

use crate::camera::modes::NavModeId;

/// Errors produced by the navcam crate.
///
/// Both variants signal programming-contract violations raised synchronously
/// to the caller; neither is a transient fault, so there is no retry policy.
#[derive(Debug)]
pub enum NavcamError {
    /// A mode-dependent operation ran before any world was bound (the
    /// navigation-mode registry is empty).
    NotInitialized,
    /// A mode identifier was not present in the registry.
    UnknownMode(NavModeId),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for NavcamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotInitialized => {
                write!(f, "camera controller not initialized: no world bound")
            }
            Self::UnknownMode(id) => {
                write!(f, "unknown navigation mode: {id}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for NavcamError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for NavcamError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
