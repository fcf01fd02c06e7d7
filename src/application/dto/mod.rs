/// Data Transfer Objects for application layer
///
/// DTOs carry requests from the CLI into the use case and results back out
/// to the presenters, keeping the domain layer isolated.
mod graph_request;
mod graph_response;
mod output_format;

pub use graph_request::{GraphRequest, ReverseQuery};
pub use graph_response::{GraphResponse, ReverseLookup};
pub use output_format::OutputFormat;
