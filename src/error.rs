// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types.
//!
//! Store mutators never surface these; they exist for the persistence
//! adapter, configuration loading and explicit saves.

use crate::config::ConfigError;

/// Application error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("Snapshot serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Snapshot writer is closed")]
    WriterClosed,

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Whether retrying the failed operation could succeed.
    ///
    /// Only storage-level failures qualify; a snapshot that fails to
    /// serialize or a bad configuration will fail the same way again.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, AppError::Persistence(_))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Persistence(err.to_string())
    }
}

/// Result type alias used across the crate.
pub type Result<T> = std::result::Result<T, AppError>;
