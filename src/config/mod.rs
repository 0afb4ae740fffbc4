//! Fixture cases pairing a program's stdin text with its expected stdout.
//!
//! Suites can be written by hand or loaded from JSON (`json` feature) or YAML
//! (`yaml` feature) files:
//!
//! ```yaml
//! cases:
//!   - name: sum
//!     input: "1 2 3\n"
//!     expected: "6\n"
//! ```

mod fixture;

pub use fixture::{FixtureCase, FixtureFormat, FixtureOutcome, FixtureSuite};
