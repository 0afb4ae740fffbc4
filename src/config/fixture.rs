use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{InputError, SingleIoError, Stage};
use crate::io::{FileInput, InputProvider};
use crate::{Input, Output};

/// One run of a program: the text it reads and the exact text it must output.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FixtureCase {
    pub name: String,
    /// Text served through `Input`
    #[serde(default)]
    pub input: String,
    /// Text the program must leave in `Output`
    pub expected: String,
}

impl FixtureCase {
    /// Create a case from its name, stdin text and expected stdout text.
    pub fn new(
        name: impl Into<String>,
        input: impl Into<String>,
        expected: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            input: input.into(),
            expected: expected.into(),
        }
    }

    /// Run `program` against a fresh `Input` holding this case's text and a
    /// fresh `Output`, and record what it produced.
    pub fn run<F>(&self, program: F) -> FixtureOutcome
    where
        F: FnOnce(&mut Input, &mut Output) -> Result<(), InputError>,
    {
        let mut input = Input::new(self.input.as_str());
        let mut output = Output::new();
        let error = program(&mut input, &mut output).err();
        let outcome = FixtureOutcome {
            name: self.name.clone(),
            expected: self.expected.clone(),
            actual: output.into_string(),
            error,
        };
        tracing::trace!(name = %outcome.name, passed = outcome.passed(), "ran fixture case");
        outcome
    }
}

/// Result of running a single `FixtureCase`.
#[derive(Debug, Clone, PartialEq)]
pub struct FixtureOutcome {
    pub name: String,
    pub expected: String,
    pub actual: String,
    /// Extraction error the program returned, if any
    pub error: Option<InputError>,
}

impl FixtureOutcome {
    /// The program finished without an input error and printed exactly the
    /// expected text.
    pub fn passed(&self) -> bool {
        self.error.is_none() && self.actual == self.expected
    }
}

/// Serialization format of a fixture file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixtureFormat {
    Json,
    Yaml,
}

impl FixtureFormat {
    /// Map a file extension (case-insensitive) to a format.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "json" => Some(FixtureFormat::Json),
            "yaml" | "yml" => Some(FixtureFormat::Yaml),
            _ => None,
        }
    }

    /// Format of a path, judged by its extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }
}

/// An ordered collection of fixture cases.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct FixtureSuite {
    #[serde(default)]
    pub cases: Vec<FixtureCase>,
}

impl FixtureSuite {
    /// Create an empty suite.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a case.
    pub fn add_case(mut self, case: FixtureCase) -> Self {
        self.cases.push(case);
        self
    }

    #[cfg(feature = "json")]
    pub fn from_json_str(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    #[cfg(feature = "yaml")]
    pub fn from_yaml_str(text: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(text)
    }

    /// Parse `text` in the given format; `id` names the source in errors.
    #[cfg_attr(not(any(feature = "json", feature = "yaml")), allow(unused_variables))]
    pub fn parse(text: &str, format: FixtureFormat, id: &str) -> Result<Self, SingleIoError> {
        match format {
            #[cfg(feature = "json")]
            FixtureFormat::Json => {
                Self::from_json_str(text).map_err(|e| SingleIoError::new(Stage::Parse, id, e))
            }
            #[cfg(feature = "yaml")]
            FixtureFormat::Yaml => {
                Self::from_yaml_str(text).map_err(|e| SingleIoError::new(Stage::Parse, id, e))
            }
            #[cfg(not(all(feature = "json", feature = "yaml")))]
            disabled => Err(SingleIoError::new(
                Stage::Unsupported,
                id,
                format!("{disabled:?} fixtures require the matching cargo feature"),
            )),
        }
    }

    /// Read and parse a suite from any provider.
    pub fn from_provider(
        provider: &dyn InputProvider,
        format: FixtureFormat,
    ) -> Result<Self, SingleIoError> {
        let mut reader = provider
            .open()
            .map_err(|e| SingleIoError::new(Stage::Open, provider.id(), e))?;
        let mut text = String::new();
        reader
            .read_to_string(&mut text)
            .map_err(|e| SingleIoError::new(Stage::Read, provider.id(), e))?;
        let suite = Self::parse(&text, format, provider.id())?;
        tracing::debug!(id = provider.id(), cases = suite.cases.len(), "loaded fixture suite");
        Ok(suite)
    }

    /// Load a suite from a `.json`, `.yaml` or `.yml` file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SingleIoError> {
        let path = path.as_ref();
        let format = FixtureFormat::from_path(path).ok_or_else(|| {
            SingleIoError::new(
                Stage::Resolve,
                path.to_string_lossy(),
                "unrecognized fixture file extension",
            )
        })?;
        Self::from_provider(&FileInput::new(path), format)
    }

    /// Run every case through `program`, in order.
    pub fn run_all<F>(&self, program: F) -> Vec<FixtureOutcome>
    where
        F: Fn(&mut Input, &mut Output) -> Result<(), InputError>,
    {
        self.cases.iter().map(|case| case.run(&program)).collect()
    }
}
