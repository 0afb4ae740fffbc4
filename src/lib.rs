//! # mockio
//!
//! Stand-ins for stdin and stdout when testing programs that read
//! whitespace-separated tokens and print text.
//!
//! ## Overview
//!
//! mockio provides:
//! - **`Input`**: Destructive, forward-only extraction of integers, doubles,
//!   strings and arrays from a source string
//! - **`Output`**: An in-memory accumulator for printed text with an optional
//!   change observer
//! - **I/O seams**: `InputProvider` / `OutputTarget` to load input from stdin,
//!   files or memory and to flush captured output anywhere
//! - **Fixture suites**: Input/expected-output pairs loadable from JSON or YAML
//!
//! ## Quick Start
//!
//! ```rust
//! use mockio::{Input, InputError, Output, output};
//!
//! fn solve(input: &mut Input, out: &mut Output) -> Result<(), InputError> {
//!     let n = input.get_int()?;
//!     let values = input.get_array_of_int()?;
//!     let sum: i64 = values.iter().take(n as usize).sum();
//!     output!(out, "sum", sum; sep = ": ");
//!     Ok(())
//! }
//!
//! let mut input = Input::new("3\n1 2 3\n");
//! let mut out = Output::new();
//! solve(&mut input, &mut out).unwrap();
//! assert_eq!(out.as_str(), "sum: 6\n");
//! ```
//!
//! ## Features
//!
//! - `json` - JSON fixture files (enabled by default)
//! - `yaml` - YAML fixture files
//! - `miette` - Pretty error reporting with miette

pub mod config;
pub mod error;
pub mod input;
pub mod io;
pub mod output;

pub use config::{FixtureCase, FixtureFormat, FixtureOutcome, FixtureSuite};
pub use error::{InputError, SingleIoError, Stage};
pub use input::Input;
pub use io::{
    FileInput, FileOutput, InMemorySink, InMemorySource, InputProvider, OutputTarget, StdinInput,
    StdoutOutput,
};
pub use output::Output;

#[cfg(feature = "miette")]
pub use error::IoDiagnostic;

/// Load an `Input` from the process's real standard input.
pub fn stdin_input() -> Result<Input, SingleIoError> {
    Input::from_provider(&StdinInput::new())
}
