/// Rendering adapters turning DOT text into images
mod graphviz_renderer;

pub use graphviz_renderer::{image_format_for, GraphvizRenderer, IMAGE_EXTENSIONS};
