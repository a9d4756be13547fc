//! Error types for the storage volume resolver
//!
//! Provides structured error types for the storage declaration parser and
//! the configuration loading around it.

use std::time::Duration;
use thiserror::Error;

/// Unified error type for the resolver
#[derive(Error, Debug)]
pub enum Error {
    // =========================================================================
    // Declaration Errors
    // =========================================================================
    #[error("Invalid mount path '{path}': must be a non-empty absolute path")]
    InvalidPath { path: String },

    #[error("Invalid storage medium '{medium}': expected one of hdd, ssd, remote_cache")]
    InvalidMedium { medium: String },

    #[error("Invalid capacity '{capacity}': expected a non-negative integer")]
    InvalidCapacity { capacity: String },

    #[error("Unknown storage attribute '{attribute}': expected medium or capacity")]
    UnknownAttribute { attribute: String },

    #[error("Duplicate mount path: {path}")]
    DuplicatePath { path: String },

    // =========================================================================
    // Configuration Errors
    // =========================================================================
    #[error("Configuration error: {0}")]
    Configuration(String),

    // =========================================================================
    // Serialization Errors
    // =========================================================================
    #[error("JSON error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    // =========================================================================
    // IO Errors
    // =========================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Action a reconciling caller should take on error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorAction {
    /// Requeue with exponential backoff
    RequeueWithBackoff,
    /// Requeue after specific duration
    RequeueAfter(Duration),
    /// Don't requeue, wait for changes
    NoRequeue,
}

impl Error {
    /// Determine what action to take for this error
    pub fn action(&self) -> ErrorAction {
        match self {
            // A bad declaration only changes when the user edits it
            Error::InvalidPath { .. }
            | Error::InvalidMedium { .. }
            | Error::InvalidCapacity { .. }
            | Error::UnknownAttribute { .. }
            | Error::DuplicatePath { .. }
            | Error::Configuration(_) => ErrorAction::NoRequeue,

            // Config file may not be mounted yet
            Error::Io(_) => ErrorAction::RequeueWithBackoff,

            // Output encoding fails the same way on every attempt
            Error::JsonParse(_) | Error::YamlParse(_) => ErrorAction::NoRequeue,
        }
    }

    /// Check if this error is retryable
    pub fn is_retryable(&self) -> bool {
        !matches!(self.action(), ErrorAction::NoRequeue)
    }

    /// Check if this error means the declaration itself must be fixed
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Error::InvalidPath { .. }
                | Error::InvalidMedium { .. }
                | Error::InvalidCapacity { .. }
                | Error::UnknownAttribute { .. }
                | Error::DuplicatePath { .. }
                | Error::Configuration(_)
        )
    }
}

/// Result type alias for the resolver
pub type Result<T> = std::result::Result<T, Error>;
