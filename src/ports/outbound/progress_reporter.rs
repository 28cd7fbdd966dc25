/// ProgressReporter port for user feedback while scanning
///
/// Also the channel for recoverable warnings: a manifest that failed to
/// parse or a scanner that gave up is reported here rather than aborting
/// the run.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports step `current` of `total`, with an optional label
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
