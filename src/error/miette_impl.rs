//! Miette integration for pretty error reporting.

use miette::{Diagnostic, Severity};
use thiserror::Error;

use super::{InputError, SingleIoError, Stage};

/// A diagnostic wrapper for mockio errors compatible with miette.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
pub struct IoDiagnostic {
    /// The error message
    pub message: String,

    #[source]
    /// The underlying error source
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,

    #[help]
    /// Help text for the user
    pub help: Option<String>,

    #[diagnostic(severity)]
    /// Severity level
    pub severity: Severity,
}

impl From<SingleIoError> for IoDiagnostic {
    fn from(e: SingleIoError) -> Self {
        let help = match e.stage {
            Stage::Resolve => "Use a .json, .yaml or .yml fixture file",
            Stage::Unsupported => "Enable the `json` or `yaml` cargo feature for this fixture",
            Stage::Parse => "Check the fixture file against the FixtureSuite layout",
            Stage::Open | Stage::Read | Stage::Write => "Check the path and its permissions",
        };
        IoDiagnostic {
            message: format!("[{}] on '{}'", e.stage, e.target),
            source: Some(e.error),
            help: Some(help.into()),
            severity: Severity::Error,
        }
    }
}

impl From<InputError> for IoDiagnostic {
    fn from(e: InputError) -> Self {
        let help = match &e {
            InputError::Empty => "The program read more values than the input provides",
            InputError::NotInt(_) => "Expected a base-10 signed integer token",
            InputError::NotDouble(_) => "Expected a floating-point token",
        };
        IoDiagnostic {
            message: e.to_string(),
            source: None,
            help: Some(help.into()),
            severity: Severity::Error,
        }
    }
}

impl From<InputError> for miette::Report {
    fn from(e: InputError) -> Self {
        miette::Report::new(IoDiagnostic::from(e))
    }
}

impl From<SingleIoError> for miette::Report {
    fn from(e: SingleIoError) -> Self {
        miette::Report::new(IoDiagnostic::from(e))
    }
}
