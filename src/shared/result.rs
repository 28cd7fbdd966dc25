/// Crate-wide result type.
///
/// Errors travel as `anyhow::Error`; callers that care about a specific
/// failure downcast to [`crate::shared::error::SbomError`].
pub type Result<T> = std::result::Result<T, anyhow::Error>;
