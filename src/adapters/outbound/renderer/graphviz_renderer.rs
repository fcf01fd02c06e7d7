use crate::ports::outbound::GraphRenderer;
use crate::shared::error::GraphError;
use crate::shared::Result;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

/// Image formats Graphviz is asked to produce, keyed by file extension
pub const IMAGE_EXTENSIONS: &[&str] = &["svg", "png", "pdf"];

/// Returns the Graphviz output format for `path`, if it names an image
pub fn image_format_for(path: &Path) -> Option<String> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    IMAGE_EXTENSIONS.contains(&ext.as_str()).then_some(ext)
}

/// GraphvizRenderer adapter piping DOT source into the `dot` executable
pub struct GraphvizRenderer {
    program: String,
}

impl GraphvizRenderer {
    pub fn new() -> Self {
        Self::with_program("dot")
    }

    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for GraphvizRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphRenderer for GraphvizRenderer {
    fn render(&self, dot_source: &str, output_path: &Path) -> Result<()> {
        let format = image_format_for(output_path).ok_or_else(|| GraphError::RenderError {
            details: format!(
                "Unsupported image format for {} (expected one of: {})",
                output_path.display(),
                IMAGE_EXTENSIONS.join(", ")
            ),
        })?;

        let mut child = Command::new(&self.program)
            .arg(format!("-T{}", format))
            .arg("-o")
            .arg(output_path)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| GraphError::RenderError {
                details: format!("Failed to start '{}': {}", self.program, e),
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            if let Err(e) = stdin.write_all(dot_source.as_bytes()) {
                drop(stdin);
                // reap the child before bailing out
                let _ = child.kill();
                let _ = child.wait();
                return Err(GraphError::RenderError {
                    details: format!("Failed to send graph to '{}': {}", self.program, e),
                }
                .into());
            }
        }

        let output = child.wait_with_output().map_err(|e| GraphError::RenderError {
            details: format!("Failed to wait for '{}': {}", self.program, e),
        })?;

        if !output.status.success() {
            return Err(GraphError::RenderError {
                details: format!(
                    "'{}' exited with {}: {}",
                    self.program,
                    output.status,
                    String::from_utf8_lossy(&output.stderr).trim()
                ),
            }
            .into());
        }

        eprintln!("✅ Graph image written to {}", output_path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_image_format_for() {
        assert_eq!(image_format_for(Path::new("graph.svg")).as_deref(), Some("svg"));
        assert_eq!(image_format_for(Path::new("out/Graph.PNG")).as_deref(), Some("png"));
        assert_eq!(image_format_for(Path::new("graph.pdf")).as_deref(), Some("pdf"));
        assert!(image_format_for(Path::new("graph.dot")).is_none());
        assert!(image_format_for(Path::new("graph")).is_none());
    }

    #[test]
    fn test_missing_program_is_render_error() {
        let renderer = GraphvizRenderer::with_program("definitely-not-graphviz-dot");
        let err = renderer
            .render("digraph dependencies {\n}\n", &PathBuf::from("graph.svg"))
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<GraphError>(),
            Some(GraphError::RenderError { .. })
        ));
    }

    #[test]
    fn test_non_image_path_is_rejected() {
        let err = GraphvizRenderer::new()
            .render("digraph dependencies {\n}\n", Path::new("graph.txt"))
            .unwrap_err();
        assert!(err.to_string().contains("Unsupported image format"));
    }

    #[cfg(unix)]
    #[test]
    fn test_program_ignoring_stdin_is_render_error() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let output_path = temp_dir.path().join("graph.svg");
        let large_source = format!(
            "digraph dependencies {{\n{}}}\n",
            "    \"A:A:1.0.0\" -> \"B:B:1.0.0\";\n".repeat(100_000)
        );

        let err = GraphvizRenderer::with_program("true")
            .render(&large_source, &output_path)
            .unwrap_err();
        assert!(err.to_string().contains("Failed to send graph to 'true'"));
        assert!(!output_path.exists());
    }
}
