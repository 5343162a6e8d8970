//! Error types for fsjson operations.
//!
//! This module provides the common `Error` type and `Result<T>` alias used
//! across all fsjson crates. Uses `thiserror` for derive macros.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur in fsjson operations.
#[derive(Error, Debug)]
pub enum Error {
    /// A required argument was missing or empty.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// I/O error without path context.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// I/O error on a specific path.
    #[error("I/O error at {}: {source}", .path.display())]
    IoPath {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input was not valid JSON, or did not match the target's shape.
    #[error("Decode error: {0}")]
    Decode(String),

    /// Value has no JSON representation.
    #[error("Encode error: {0}")]
    Encode(String),

    /// Refused to overwrite an existing filesystem entry.
    #[error("File already exists at path: {}", .0.display())]
    AlreadyExists(PathBuf),

    /// An environment variable referenced in a path is not defined.
    #[error("Undefined environment variable: ${0}")]
    UndefinedVariable(String),
}

impl Error {
    /// Create an invalid argument error.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Attach a path to an I/O error.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Self::IoPath {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create a decode error.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Create an encode error.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Create an already-exists error for `path`.
    pub fn already_exists(path: impl AsRef<Path>) -> Self {
        Self::AlreadyExists(path.as_ref().to_path_buf())
    }

    /// Create an undefined variable error.
    pub fn undefined_variable(name: impl Into<String>) -> Self {
        Self::UndefinedVariable(name.into())
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// True for both path-less and path-carrying I/O errors.
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io(_) | Self::IoPath { .. })
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode(_))
    }

    pub fn is_encode(&self) -> bool {
        matches!(self, Self::Encode(_))
    }

    pub fn is_already_exists(&self) -> bool {
        matches!(self, Self::AlreadyExists(_))
    }

    /// Stable code for programmatic handling.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidArgument(_) => "INVALID_ARGUMENT",
            Self::Io(_) | Self::IoPath { .. } => "IO_ERROR",
            Self::Decode(_) => "DECODE_ERROR",
            Self::Encode(_) => "ENCODE_ERROR",
            Self::AlreadyExists(_) => "ALREADY_EXISTS",
            Self::UndefinedVariable(_) => "UNDEFINED_VARIABLE",
        }
    }
}

/// Result type alias using fsjson's Error type.
pub type Result<T> = std::result::Result<T, Error>;
