//! Output target trait definition.

use std::fmt::Debug;
use std::io::Write;

/// A sink that captured `Output` text can be printed to.
pub trait OutputTarget: Send + Sync + Debug {
    /// Identifier used in errors and logs: "-" for stdout, the path for files.
    fn id(&self) -> &str;

    /// Open the target for writing after any existing content.
    fn open(&self) -> std::io::Result<Box<dyn Write + Send>>;
}
