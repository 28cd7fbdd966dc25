use crate::sbom_generation::domain::Component;
use crate::shared::Result;
use std::fmt;
use std::path::{Path, PathBuf};

/// A recoverable problem found while reading one manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseWarning {
    pub source: PathBuf,
    pub message: String,
}

impl ParseWarning {
    pub fn new(source: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.source.display(), self.message)
    }
}

/// Components extracted by one scanner plus anything it had to skip
#[derive(Debug, Clone, Default)]
pub struct ScanOutcome {
    pub components: Vec<Component>,
    pub warnings: Vec<ParseWarning>,
}

impl ScanOutcome {
    /// Folds the result of parsing one manifest into this outcome
    ///
    /// A failed manifest contributes a warning and no components.
    pub fn absorb(&mut self, source: &Path, parsed: Result<Vec<Component>>) {
        match parsed {
            Ok(components) => self.components.extend(components),
            Err(e) => self.warnings.push(ParseWarning::new(source, e.to_string())),
        }
    }
}

/// ProjectScanner port: detector plus extractor for one ecosystem
///
/// `can_handle` must be cheap and side-effect free (existence checks and
/// shallow globbing). `extract` is best effort: one bad manifest becomes a
/// [`ParseWarning`] and the remaining manifests are still read. An `Err`
/// from `extract` means the scanner as a whole could not run.
pub trait ProjectScanner: Send + Sync {
    /// Short display name, also used to keep registrations unique
    fn name(&self) -> &'static str;

    fn can_handle(&self, root: &Path) -> bool;

    fn extract(&self, root: &Path) -> Result<ScanOutcome>;
}
