//! Tests for miette diagnostics.

use miette::{Diagnostic, Severity};

use crate::{InputError, IoDiagnostic, SingleIoError, Stage};

#[test]
fn input_error_diagnostic() {
    let diag = IoDiagnostic::from(InputError::NotInt("abc".into()));
    assert_eq!(diag.to_string(), "not an integer: 'abc'");
    assert_eq!(diag.severity(), Some(Severity::Error));
    assert!(diag.help().is_some());
}

#[test]
fn input_error_diagnostic_states_message_once() {
    let diag = IoDiagnostic::from(InputError::Empty);
    assert!(std::error::Error::source(&diag).is_none());

    let report: miette::Report = InputError::NotDouble("x".into()).into();
    assert_eq!(report.chain().count(), 1);
}

#[test]
fn io_error_diagnostic() {
    let diag = IoDiagnostic::from(SingleIoError::new(Stage::Parse, "cases.yaml", "bad"));
    assert_eq!(diag.to_string(), "[Parse] on 'cases.yaml'");
    assert_eq!(diag.source.unwrap().to_string(), "bad");
}

#[test]
fn help_text_depends_on_stage() {
    let help = |stage| {
        IoDiagnostic::from(SingleIoError::new(stage, "cases.yaml", "x"))
            .help
            .unwrap()
    };
    assert!(help(Stage::Resolve).contains(".yaml"));
    assert!(help(Stage::Unsupported).contains("cargo feature"));
    assert_ne!(help(Stage::Resolve), help(Stage::Unsupported));
}

#[test]
fn report_from_input_error() {
    let report: miette::Report = InputError::Empty.into();
    assert_eq!(report.to_string(), "no input remaining");
}
