/// Console adapters writing human-oriented output to stderr
mod progress_reporter;

pub use progress_reporter::StderrProgressReporter;
