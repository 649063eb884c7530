//! Render module - Text and color renderers plus the live terminal view.

mod text;
mod view;

pub use text::{ColorRenderer, Renderer, TextRenderer};
pub use view::run_scroll;
