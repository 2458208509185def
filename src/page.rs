//! Page loading and rendering

use anyhow::{Context, Result};
use maud::Markup;
use std::fs;
use std::path::{Path, PathBuf};

use crate::assets::STYLESHEETS;
use crate::components::layout::document;
use crate::content::{Frontmatter, PageContent};
use crate::markdown::MarkdownRenderer;
use crate::route::{asset_href, route_for};

/// A markdown source rendered and ready for layout.
#[derive(Debug, Clone)]
pub struct Page {
    source: PathBuf,
    route: String,
    content: PageContent,
}

impl Page {
    /// Loads a page from a file under the pages root.
    ///
    /// # Arguments
    ///
    /// * `root`: Pages root directory
    /// * `path`: Page source file, inside `root`
    /// * `renderer`: Markdown renderer for the page body
    ///
    /// # Errors
    ///
    /// Returns error if the file is outside `root`, cannot be read, has
    /// malformed frontmatter, or fails to render
    pub fn load(root: &Path, path: &Path, renderer: &MarkdownRenderer) -> Result<Self> {
        let relative = path
            .strip_prefix(root)
            .with_context(|| format!("Page {} is outside {}", path.display(), root.display()))?;
        let source = fs::read_to_string(path)
            .with_context(|| format!("Failed to read page: {}", path.display()))?;

        Self::from_source(relative, &source, renderer)
    }

    /// Builds a page from in-memory markdown source.
    ///
    /// # Errors
    ///
    /// Returns error if the route cannot be derived, frontmatter is
    /// malformed, or rendering fails
    pub fn from_source(relative: &Path, source: &str, renderer: &MarkdownRenderer) -> Result<Self> {
        let route = route_for(relative)?;
        let (frontmatter, body) = Frontmatter::parse(source)
            .with_context(|| format!("Failed to parse frontmatter in {}", relative.display()))?;
        let html = renderer
            .render(body)
            .with_context(|| format!("Failed to render markdown in {}", relative.display()))?;

        Ok(Self {
            source: relative.to_path_buf(),
            route,
            content: PageContent::from_html(frontmatter, html),
        })
    }

    /// Source path relative to the pages root.
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// URL route the page is served at, such as `/intro/`.
    pub fn route(&self) -> &str {
        &self.route
    }

    /// Rendered body and metadata handed to the layout.
    pub fn content(&self) -> &PageContent {
        &self.content
    }

    /// Resolved header title.
    pub fn title(&self) -> &str {
        self.content.title()
    }

    /// Renders the full HTML document with stylesheets linked relative to
    /// the page route.
    pub fn render(&self) -> Markup {
        let stylesheets: Vec<String> = STYLESHEETS
            .iter()
            .map(|(name, _)| asset_href(&self.route, &format!("assets/{}", name)))
            .collect();
        document(&self.content, &stylesheets)
    }
}
