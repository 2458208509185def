//! Static documentation site generator with a shared page layout.

mod assets;
pub mod components;
mod config;
mod content;
mod markdown;
mod page;
pub mod route;
mod site;

pub use assets::{STYLESHEETS, write_css_assets};
pub use components::layout::{document, page_layout};
pub use config::Config;
pub use content::{DEFAULT_TITLE, Frontmatter, PageContent, resolve_title};
pub use markdown::MarkdownRenderer;
pub use page::Page;
pub use site::{SiteReport, discover_pages, generate_site, load_pages};
