//! Error types for mockio.
//!
//! This module provides:
//! - `InputError`: Failures when extracting a value from an `Input`
//! - `Stage`: Indicates where a provider, target or fixture error occurred
//! - `SingleIoError`: A single I/O error with context

use std::fmt;

use thiserror::Error;

/// Error returned by the `Input` getters.
///
/// Every variant is value-level: the caller may keep extracting from whatever
/// text remains after the failed call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// No text remains (or, for numeric getters, only whitespace remains)
    #[error("no input remaining")]
    Empty,
    /// The token did not parse as a signed integer
    #[error("not an integer: '{0}'")]
    NotInt(String),
    /// The token did not parse as a floating-point number
    #[error("not a double: '{0}'")]
    NotDouble(String),
}

impl InputError {
    /// The offending token, if the error carries one.
    pub fn token(&self) -> Option<&str> {
        match self {
            InputError::Empty => None,
            InputError::NotInt(token) | InputError::NotDouble(token) => Some(token),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Error while picking a handler for a path or format
    Resolve,
    /// The format is known but its cargo feature is disabled
    Unsupported,
    /// Error while opening the I/O stream
    Open,
    Read,
    Write,
    Parse,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Resolve => write!(f, "Resolve"),
            Stage::Unsupported => write!(f, "Unsupported"),
            Stage::Open => write!(f, "Open"),
            Stage::Read => write!(f, "Read"),
            Stage::Write => write!(f, "Write"),
            Stage::Parse => write!(f, "Parse"),
        }
    }
}

#[derive(Debug)]
pub struct SingleIoError {
    /// Stage where the error occurred
    pub stage: Stage,
    /// Identifier of the target (file path, "-" for stdin/stdout, etc.)
    pub target: String,
    /// The underlying error
    pub error: Box<dyn std::error::Error + Send + Sync>,
}

impl SingleIoError {
    pub fn new(
        stage: Stage,
        target: impl Into<String>,
        error: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self {
            stage,
            target: target.into(),
            error: error.into(),
        }
    }
}

impl fmt::Display for SingleIoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.stage, self.target, self.error)
    }
}

impl std::error::Error for SingleIoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.error.as_ref())
    }
}

#[cfg(feature = "miette")]
mod miette_impl;

#[cfg(feature = "miette")]
pub use miette_impl::*;
