//! Error types for the activities API.
//!
//! [`RegistryError`] is what a client sees: every variant maps to an HTTP
//! status and a `{"detail": ...}` body. [`Error`] covers startup failures
//! (configuration, seed loading, binding) that abort the process.

use std::path::PathBuf;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Client-facing failures of registry operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Activity not found")]
    ActivityNotFound,

    #[error("Student is already signed up")]
    AlreadySignedUp,

    #[error("Student is not registered for this activity")]
    NotRegistered,

    #[error("{0}")]
    InvalidInput(String),
}

impl RegistryError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::ActivityNotFound | Self::NotRegistered => StatusCode::NOT_FOUND,
            Self::AlreadySignedUp | Self::InvalidInput(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for RegistryError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "detail": self.to_string() }))).into_response()
    }
}

/// Startup errors.
#[derive(Error, Debug)]
pub enum Error {
    /// A configuration value could not be parsed.
    #[error("invalid configuration for {key}: {message}")]
    Config {
        /// Environment variable name.
        key: &'static str,
        /// Description of the problem.
        message: String,
    },

    /// The seed file could not be read.
    #[error("failed to read seed file {path}: {source}")]
    SeedRead {
        /// Path to the seed file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The seed file is not a valid activity map.
    #[error("invalid seed data: {0}")]
    SeedParse(#[from] serde_json::Error),

    /// The seed parsed but breaks a registry invariant.
    #[error("invalid seed data: {message}")]
    SeedInvalid {
        /// Description of the violation.
        message: String,
    },

    /// Binding or serving failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for startup operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    #[must_use]
    pub fn config(key: &'static str, message: impl Into<String>) -> Self {
        Self::Config {
            key,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn seed_invalid(message: impl Into<String>) -> Self {
        Self::SeedInvalid {
            message: message.into(),
        }
    }
}
