//! Tests for error rendering.

use std::error::Error as _;
use std::io;

use crate::{InputError, SingleIoError, Stage};

#[test]
fn input_error_messages() {
    assert_eq!(InputError::Empty.to_string(), "no input remaining");
    assert_eq!(
        InputError::NotInt("abc".into()).to_string(),
        "not an integer: 'abc'"
    );
    assert_eq!(
        InputError::NotDouble("1,5".into()).to_string(),
        "not a double: '1,5'"
    );
}

#[test]
fn input_error_token() {
    assert_eq!(InputError::Empty.token(), None);
    assert_eq!(InputError::NotInt("x".into()).token(), Some("x"));
    assert_eq!(InputError::NotDouble("y".into()).token(), Some("y"));
}

#[test]
fn single_io_error_display_and_source() {
    let err = SingleIoError::new(
        Stage::Open,
        "cases.json",
        io::Error::new(io::ErrorKind::NotFound, "no such file"),
    );
    assert_eq!(err.to_string(), "[Open] cases.json: no such file");
    assert_eq!(err.source().unwrap().to_string(), "no such file");
}

#[test]
fn stage_display() {
    let names: Vec<String> = [
        Stage::Resolve,
        Stage::Unsupported,
        Stage::Open,
        Stage::Read,
        Stage::Write,
        Stage::Parse,
    ]
    .iter()
    .map(ToString::to_string)
    .collect();
    assert_eq!(names, ["Resolve", "Unsupported", "Open", "Read", "Write", "Parse"]);
}
