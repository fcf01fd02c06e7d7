use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow scripts to distinguish between bad invocations
/// and failures that happened while analysing the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the graph was built and presented
    Success = 0,
    /// Invalid command-line arguments (clap parsing or validation errors)
    InvalidArguments = 2,
    /// Application error (malformed root, file I/O error, rendering error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for dependency graph analysis.
///
/// `ResolutionFailure` never escapes a graph build: the builder downgrades it
/// to a warning and a leaf node. `TargetNotFound` only fails the reverse query
/// that raised it.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("Malformed package reference: '{reference}'\nReason: {reason}\n\n💡 Hint: Use the group:artifact form (e.g. org.slf4j:slf4j-api) or a single token for test fixtures")]
    MalformedPackageReference { reference: String, reason: String },

    #[error("Failed to resolve dependencies of {package}\nDetails: {details}")]
    ResolutionFailure { package: String, details: String },

    #[error("Package '{target}' is not part of the dependency graph\n\n💡 Hint: Reverse lookups only search packages discovered while building the graph")]
    TargetNotFound { target: String },

    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Failed to render graph image\nDetails: {details}\n\n💡 Hint: Install Graphviz and make sure the 'dot' executable is on your PATH, or write a .dot file instead")]
    RenderError { details: String },
}
