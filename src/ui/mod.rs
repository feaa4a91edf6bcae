//! Terminal-facing UI: status rendering, the theme picker, and previews.

pub mod picker;
pub mod render;
pub mod settings;
pub mod swatch;

pub use picker::{pick_theme, resolve_selector};
pub use render::{RenderSink, Renderer};
