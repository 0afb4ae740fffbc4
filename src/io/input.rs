//! Input provider trait definition.

use std::fmt::Debug;
use std::io::Read;

/// Something whose full text can become the source of an `Input`.
pub trait InputProvider: Send + Sync + Debug {
    /// Identifier used in errors and logs: "-" for stdin, the path for files.
    fn id(&self) -> &str;

    /// Open a fresh reader positioned at the beginning.
    fn open(&self) -> std::io::Result<Box<dyn Read + Send>>;
}
