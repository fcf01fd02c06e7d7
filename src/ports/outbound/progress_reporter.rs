/// ProgressReporter port for reporting progress during a graph build
///
/// This is the crate's logging channel: messages are meant for a human on
/// stderr and never mix with the formatted graph on stdout.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports traversal progress
    ///
    /// # Arguments
    /// * `current` - Nodes processed so far
    /// * `total` - Nodes discovered so far (grows while traversing)
    /// * `message` - Optional message to include
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
