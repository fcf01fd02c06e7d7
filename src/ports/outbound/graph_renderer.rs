use crate::shared::Result;
use std::path::Path;

/// GraphRenderer port for producing an image from a DOT description
pub trait GraphRenderer {
    /// Renders `dot_source` into `output_path`
    ///
    /// The image format is taken from the output file extension.
    ///
    /// # Errors
    /// Returns an error if the renderer is unavailable or rejects the input
    fn render(&self, dot_source: &str, output_path: &Path) -> Result<()>;
}
