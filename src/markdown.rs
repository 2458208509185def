//! Markdown rendering with GitHub Flavored Markdown support.
//!
//! Page bodies are rendered with comrak using GFM extensions (tables,
//! strikethrough, autolinks, task lists) and fenced code blocks are
//! highlighted with syntect.

mod renderer;

pub use renderer::MarkdownRenderer;
