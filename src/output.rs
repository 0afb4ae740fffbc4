//! In-memory capture for standard output.

use std::fmt::{self, Display, Write as _};
use std::io::Write as _;

use crate::error::{SingleIoError, Stage};
use crate::io::{OutputTarget, StdoutOutput};

/// Default separator placed between items.
pub const DEFAULT_SEP: &str = " ";
/// Default terminator appended after the items.
pub const DEFAULT_END: &str = "\n";

type Observer = Box<dyn FnMut(&str, &str)>;

/// Mock standard output that accumulates text instead of printing it.
///
/// An optional observer is called after every append with the previous and the
/// updated text.
#[derive(Default)]
pub struct Output {
    text: String,
    observer: Option<Observer>,
}

impl Output {
    /// Create an empty output with no observer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Output::set_observer`].
    pub fn with_observer<F>(mut self, observer: F) -> Self
    where
        F: FnMut(&str, &str) + 'static,
    {
        self.set_observer(observer);
        self
    }

    /// Install the change observer, replacing any previous one.
    pub fn set_observer<F>(&mut self, observer: F)
    where
        F: FnMut(&str, &str) + 'static,
    {
        self.observer = Some(Box::new(observer));
    }

    /// Remove the change observer.
    pub fn clear_observer(&mut self) {
        self.observer = None;
    }

    /// Everything output since the last reset.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Consume the output and return the accumulated text.
    pub fn into_string(self) -> String {
        self.text
    }

    /// Append the items separated by a space and followed by a newline.
    pub fn output(&mut self, items: &[&dyn Display]) {
        self.output_with(items, DEFAULT_SEP, DEFAULT_END);
    }

    /// Append the items joined with `sep` and followed by `end`.
    pub fn output_with(&mut self, items: &[&dyn Display], sep: &str, end: &str) {
        self.output_iter(items, sep, end);
    }

    /// Like [`Output::output_with`] for any iterator of displayable values.
    pub fn output_iter<I>(&mut self, items: I, sep: &str, end: &str)
    where
        I: IntoIterator,
        I::Item: Display,
    {
        let old = self.text.clone();
        for (i, item) in items.into_iter().enumerate() {
            if i > 0 {
                self.text.push_str(sep);
            }
            // Writing into a String cannot fail.
            let _ = write!(self.text, "{item}");
        }
        self.text.push_str(end);
        if let Some(observer) = self.observer.as_mut() {
            observer(&old, &self.text);
        }
    }

    /// Clear the accumulated text. The observer is not called.
    pub fn reset(&mut self) {
        self.text.clear();
    }

    /// Print the accumulated text to stdout and reset it.
    pub fn print(&mut self) {
        self.print_with(true);
    }

    /// Print the accumulated text to stdout, resetting it if `reset` is true.
    pub fn print_with(&mut self, reset: bool) {
        if let Err(e) = self.print_to(&StdoutOutput::new(), reset) {
            tracing::warn!(error = %e, "failed to print output");
        }
    }

    /// Write the accumulated text and a trailing newline to `target`.
    ///
    /// The text is only reset when the write succeeded and `reset` is true.
    pub fn print_to(&mut self, target: &dyn OutputTarget, reset: bool) -> Result<(), SingleIoError> {
        let mut writer = target
            .open()
            .map_err(|e| SingleIoError::new(Stage::Open, target.id(), e))?;
        writeln!(writer, "{}", self.text)
            .and_then(|()| writer.flush())
            .map_err(|e| SingleIoError::new(Stage::Write, target.id(), e))?;
        tracing::debug!(id = target.id(), bytes = self.text.len() + 1, "printed output");
        if reset {
            self.reset();
        }
        Ok(())
    }
}

impl fmt::Debug for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Output")
            .field("text", &self.text)
            .field("observer", &self.observer.is_some())
            .finish()
    }
}

impl Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Append heterogeneous displayable items to an [`Output`].
///
/// ```
/// use mockio::{Output, output};
///
/// let mut out = Output::new();
/// output!(out, 23, "apples");
/// output!(out, 1.5, 2; sep = ",");
/// output!(out, "no newline"; end = "");
/// assert_eq!(out.as_str(), "23 apples\n1.5,2\nno newline");
/// ```
#[macro_export]
macro_rules! output {
    ($out:expr $(, $item:expr)* ; sep = $sep:expr, end = $end:expr $(,)?) => {
        $out.output_with(&[$(&$item as &dyn ::core::fmt::Display),*], $sep, $end)
    };
    ($out:expr $(, $item:expr)* ; end = $end:expr, sep = $sep:expr $(,)?) => {
        $out.output_with(&[$(&$item as &dyn ::core::fmt::Display),*], $sep, $end)
    };
    ($out:expr $(, $item:expr)* ; sep = $sep:expr $(,)?) => {
        $out.output_with(
            &[$(&$item as &dyn ::core::fmt::Display),*],
            $sep,
            $crate::output::DEFAULT_END,
        )
    };
    ($out:expr $(, $item:expr)* ; end = $end:expr $(,)?) => {
        $out.output_with(
            &[$(&$item as &dyn ::core::fmt::Display),*],
            $crate::output::DEFAULT_SEP,
            $end,
        )
    };
    ($out:expr $(, $item:expr)* $(,)?) => {
        $out.output(&[$(&$item as &dyn ::core::fmt::Display),*])
    };
}
