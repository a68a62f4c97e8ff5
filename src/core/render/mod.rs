//! Display layer for formatted messages outside the TUI.
//!
//! Renderers take [`DisplayBlock`](crate::core::format::DisplayBlock)s and own
//! escaping: nothing from the reply text reaches the output as markup.

mod html;
mod terminal;

pub use html::render_html;
pub use terminal::{render_terminal, strip_controls};
