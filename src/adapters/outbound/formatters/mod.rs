/// Formatter adapters for the supported graph output formats
mod dot_formatter;
mod json_formatter;
pub mod report;
mod tree_formatter;

pub use dot_formatter::DotFormatter;
pub use json_formatter::JsonFormatter;
pub use report::{render_cycle_report, render_reverse_report};
pub use tree_formatter::TreeFormatter;
