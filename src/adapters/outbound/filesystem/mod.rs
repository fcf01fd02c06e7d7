/// Filesystem adapters: fixture-backed resolver and output writers
mod file_writer;
mod fixture_repository;

pub use file_writer::{FileSystemWriter, StdoutPresenter};
pub use fixture_repository::{FixtureRepository, MalformedLine, FIXTURE_VERSION};
