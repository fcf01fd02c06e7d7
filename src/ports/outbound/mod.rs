/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (repositories, console, files, renderers).
pub mod dependency_resolver;
pub mod graph_formatter;
pub mod graph_renderer;
pub mod output_presenter;
pub mod progress_reporter;

pub use dependency_resolver::DependencyResolver;
pub use graph_formatter::GraphFormatter;
pub use graph_renderer::GraphRenderer;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
