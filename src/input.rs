//! Tokenizing mock for standard input.

use std::io::Read;
use std::str::FromStr;

use crate::error::{InputError, SingleIoError, Stage};
use crate::io::InputProvider;

/// Mock standard input backed by a source string.
///
/// Values are extracted front to back; every getter consumes what it parsed
/// plus one trailing delimiter, and nothing consumed can be read again.
///
/// ```
/// use mockio::Input;
///
/// let mut input = Input::new("3\n10 20 30\nhello world");
/// assert_eq!(input.get_int().unwrap(), 3);
/// assert_eq!(input.get_array_of_int().unwrap(), vec![10, 20, 30]);
/// assert_eq!(input.get_string().unwrap(), "hello world");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Input {
    source: String,
    pos: usize,
}

impl Input {
    /// Create an input that will hand out the given text.
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            pos: 0,
        }
    }

    /// Read a provider to the end and use its content as the source text.
    pub fn from_provider(provider: &dyn InputProvider) -> Result<Self, SingleIoError> {
        let mut reader = provider
            .open()
            .map_err(|e| SingleIoError::new(Stage::Open, provider.id(), e))?;
        let mut source = String::new();
        reader
            .read_to_string(&mut source)
            .map_err(|e| SingleIoError::new(Stage::Read, provider.id(), e))?;
        tracing::debug!(id = provider.id(), bytes = source.len(), "loaded input");
        Ok(Self::new(source))
    }

    /// The text that has not been consumed yet.
    pub fn remaining(&self) -> &str {
        &self.source[self.pos..]
    }

    /// Number of bytes consumed so far.
    pub fn consumed(&self) -> usize {
        self.pos
    }

    /// True once no text at all remains.
    pub fn is_exhausted(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Next whitespace-delimited token as an integer.
    pub fn get_int(&mut self) -> Result<i64, InputError> {
        let token = self.next_token()?;
        parse_or(&token, InputError::NotInt)
    }

    /// Next whitespace-delimited token as a double.
    pub fn get_double(&mut self) -> Result<f64, InputError> {
        let token = self.next_token()?;
        parse_or(&token, InputError::NotDouble)
    }

    /// The rest of the current line, without the newline.
    pub fn get_string(&mut self) -> Result<String, InputError> {
        self.get_string_until(Some('\n'))
    }

    /// Text up to (not including) `until`, or everything left when `until`
    /// is `None`. Leading whitespace is kept.
    pub fn get_string_until(&mut self, until: Option<char>) -> Result<String, InputError> {
        if self.is_exhausted() {
            return Err(InputError::Empty);
        }
        Ok(self.take_segment(until).to_owned())
    }

    /// The integers on the rest of the current line.
    pub fn get_array_of_int(&mut self) -> Result<Vec<i64>, InputError> {
        self.get_array_of_int_until(Some('\n'))
    }

    /// The integers up to `until`, or in all remaining text when `until` is
    /// `None`.
    pub fn get_array_of_int_until(&mut self, until: Option<char>) -> Result<Vec<i64>, InputError> {
        let fields = self.next_fields(until)?;
        fields
            .iter()
            .map(|field| parse_or(field, InputError::NotInt))
            .collect()
    }

    /// The doubles on the rest of the current line.
    pub fn get_array_of_double(&mut self) -> Result<Vec<f64>, InputError> {
        self.get_array_of_double_until(Some('\n'))
    }

    /// The doubles up to `until`, or in all remaining text when `until` is
    /// `None`.
    pub fn get_array_of_double_until(
        &mut self,
        until: Option<char>,
    ) -> Result<Vec<f64>, InputError> {
        let fields = self.next_fields(until)?;
        fields
            .iter()
            .map(|field| parse_or(field, InputError::NotDouble))
            .collect()
    }

    fn skip_whitespace(&mut self) {
        let rest = self.remaining();
        let trimmed = rest.trim_start_matches(char::is_whitespace);
        self.pos += rest.len() - trimmed.len();
    }

    /// Move past `len` bytes and then one more character, clamped to the end.
    /// A `\r\n` pair counts as a single character.
    fn advance_past(&mut self, len: usize) {
        self.pos += len;
        let rest = self.remaining();
        if rest.starts_with("\r\n") {
            self.pos += 2;
        } else if let Some(delim) = rest.chars().next() {
            self.pos += delim.len_utf8();
        }
    }

    fn take_segment(&mut self, until: Option<char>) -> &str {
        let start = self.pos;
        let len = match until {
            Some(delim) => self.remaining().find(delim).unwrap_or(self.remaining().len()),
            None => self.remaining().len(),
        };
        self.advance_past(len);
        let segment = &self.source[start..start + len];
        // a line ended by "\r\n" does not keep the '\r'
        match until {
            Some('\n') => segment.strip_suffix('\r').unwrap_or(segment),
            _ => segment,
        }
    }

    fn next_token(&mut self) -> Result<String, InputError> {
        self.skip_whitespace();
        if self.is_exhausted() {
            return Err(InputError::Empty);
        }
        let rest = self.remaining();
        let len = rest.find(char::is_whitespace).unwrap_or(rest.len());
        let token = rest[..len].to_owned();
        self.advance_past(len);
        Ok(token)
    }

    fn next_fields(&mut self, until: Option<char>) -> Result<Vec<String>, InputError> {
        self.skip_whitespace();
        if self.is_exhausted() {
            return Err(InputError::Empty);
        }
        Ok(self
            .take_segment(until)
            .split_whitespace()
            .map(str::to_owned)
            .collect())
    }
}

impl From<&str> for Input {
    fn from(source: &str) -> Self {
        Self::new(source)
    }
}

impl From<String> for Input {
    fn from(source: String) -> Self {
        Self::new(source)
    }
}

fn parse_or<T: FromStr>(token: &str, err: fn(String) -> InputError) -> Result<T, InputError> {
    token.parse().map_err(|_| {
        let err = err(token.to_owned());
        tracing::trace!(%err, "failed to parse token");
        err
    })
}
