//! Sources an `Input` can be loaded from and sinks an `Output` can be
//! printed to.
//!
//! - `InputProvider` / `OutputTarget`: the two seams
//! - stdin, stdout and file implementations
//! - in-memory implementations for tests

mod input;
mod memory;
mod output;
mod std_io;

pub use input::InputProvider;
pub use memory::{InMemorySink, InMemorySource};
pub use output::OutputTarget;
pub use std_io::{FileInput, FileOutput, StdinInput, StdoutOutput};
