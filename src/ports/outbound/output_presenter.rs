use crate::shared::Result;

/// OutputPresenter port for presenting rendered documents
///
/// Abstracts where an exported BOM or report ends up (stdout, a file).
pub trait OutputPresenter {
    /// # Errors
    /// Returns an error if writing to the destination fails
    fn present(&self, content: &str) -> Result<()>;
}
