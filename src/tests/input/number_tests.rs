//! Tests for `get_int` and `get_double`.

use crate::{Input, InputError};

#[test]
fn get_int_skips_leading_whitespace() {
    let mut io = Input::new(" 23");
    assert_eq!(io.get_int().unwrap(), 23);
    assert!(io.is_exhausted());
}

#[test]
fn get_int_on_whitespace_only_is_empty() {
    let mut io = Input::new("   ");
    assert_eq!(io.get_int(), Err(InputError::Empty));

    let mut io = Input::new("");
    assert_eq!(io.get_int(), Err(InputError::Empty));
}

#[test]
fn get_int_reports_the_whole_token() {
    let mut io = Input::new(" abc  ");
    assert_eq!(io.get_int(), Err(InputError::NotInt("abc".into())));
    // token and one trailing space are gone
    assert_eq!(io.remaining(), " ");
    assert_eq!(io.get_int(), Err(InputError::Empty));
}

#[test]
fn failed_get_int_still_advances() {
    let mut io = Input::new("x1 5");
    assert_eq!(io.get_int(), Err(InputError::NotInt("x1".into())));
    assert_eq!(io.get_int().unwrap(), 5);
}

#[test]
fn get_int_leaves_cursor_after_delimiter() {
    let mut io = Input::new("12 rest");
    assert_eq!(io.get_int().unwrap(), 12);
    assert_eq!(io.consumed(), 3);
    assert_eq!(io.remaining(), "rest");
}

#[test]
fn get_int_accepts_signs() {
    let mut io = Input::new("-7 +8");
    assert_eq!(io.get_int().unwrap(), -7);
    assert_eq!(io.get_int().unwrap(), 8);
}

#[test]
fn get_int_rejects_decimals() {
    let mut io = Input::new("2.5");
    assert_eq!(io.get_int(), Err(InputError::NotInt("2.5".into())));
}

#[test]
fn get_multiple_ints_across_lines() {
    let mut io = Input::new("10   11 12\n13 14\n15 16");
    for i in 10..=16 {
        assert_eq!(io.get_int().unwrap(), i);
    }
    assert_eq!(io.get_int(), Err(InputError::Empty));
}

#[test]
fn trailing_delimiter_is_consumed_even_when_newline() {
    let mut io = Input::new("1\n\nabc");
    assert_eq!(io.get_int().unwrap(), 1);
    assert_eq!(io.remaining(), "\nabc");
    // the second newline ends an empty line
    assert_eq!(io.get_string().unwrap(), "");
    assert_eq!(io.get_string().unwrap(), "abc");
}

#[test]
fn crlf_after_token_is_one_delimiter() {
    let mut io = Input::new("5\r\nhello\r\n");
    assert_eq!(io.get_int().unwrap(), 5);
    assert_eq!(io.remaining(), "hello\r\n");
    assert_eq!(io.get_string().unwrap(), "hello");
    assert!(io.is_exhausted());
}

#[test]
fn multibyte_whitespace_delimiter_keeps_char_boundary() {
    let mut io = Input::new("5\u{3000}7");
    assert_eq!(io.get_int().unwrap(), 5);
    assert_eq!(io.remaining(), "7");
    assert_eq!(io.get_int().unwrap(), 7);
}

#[test]
fn get_double_parses_token() {
    let mut io = Input::new("23.5");
    assert_eq!(io.get_double().unwrap(), 23.5);
}

#[test]
fn get_double_accepts_integers_and_exponents() {
    let mut io = Input::new("4 1e3 -0.25");
    assert_eq!(io.get_double().unwrap(), 4.0);
    assert_eq!(io.get_double().unwrap(), 1000.0);
    assert_eq!(io.get_double().unwrap(), -0.25);
}

#[test]
fn get_multiple_doubles_across_lines() {
    let mut io = Input::new("10.0 11 12\n13 14.0\n15 16");
    for i in 10..=16 {
        assert_eq!(io.get_double().unwrap(), i as f64);
    }
}

#[test]
fn get_double_errors() {
    let mut io = Input::new("\t\n");
    assert_eq!(io.get_double(), Err(InputError::Empty));

    let mut io = Input::new("1,5 2");
    assert_eq!(io.get_double(), Err(InputError::NotDouble("1,5".into())));
    assert_eq!(io.get_double().unwrap(), 2.0);
}
