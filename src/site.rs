//! Static site generation from a pages directory.

use anyhow::{Context, Result, bail};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::assets::write_css_assets;
use crate::config::Config;
use crate::markdown::MarkdownRenderer;
use crate::page::Page;
use crate::route::{is_page_source, output_path};

/// Summary of a generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteReport {
    routes: Vec<String>,
}

impl SiteReport {
    /// Number of pages written.
    pub fn page_count(&self) -> usize {
        self.routes.len()
    }

    /// Routes written, in generation order.
    pub fn routes(&self) -> &[String] {
        &self.routes
    }
}

/// Collects page sources under `root`, sorted by path.
///
/// Hidden files and directories (leading `.`) are skipped.
///
/// # Errors
///
/// Returns error if the directory cannot be traversed
pub fn discover_pages(root: &Path) -> Result<Vec<PathBuf>> {
    let mut pages = Vec::new();

    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry));

    for entry in walker {
        let entry =
            entry.with_context(|| format!("Failed to walk pages directory: {}", root.display()))?;
        if entry.file_type().is_file() && is_page_source(entry.path()) {
            pages.push(entry.into_path());
        }
    }

    Ok(pages)
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

/// Loads every page under `root`.
///
/// # Errors
///
/// Returns error if any page fails to load or two sources map to the same
/// route
pub fn load_pages(root: &Path, renderer: &MarkdownRenderer) -> Result<Vec<Page>> {
    let mut by_route: BTreeMap<String, PathBuf> = BTreeMap::new();
    let mut pages = Vec::new();

    for path in discover_pages(root)? {
        let page = Page::load(root, &path, renderer)?;

        if let Some(existing) = by_route.get(page.route()) {
            bail!(
                "Pages {} and {} both map to route {}",
                existing.display(),
                page.source().display(),
                page.route()
            );
        }
        by_route.insert(page.route().to_string(), page.source().to_path_buf());

        tracing::debug!(route = page.route(), title = page.title(), "Loaded page");
        pages.push(page);
    }

    Ok(pages)
}

/// Generates the static site described by `config`.
///
/// Renders every page through the layout shell and writes it to
/// `<output>/<route>/index.html`, then writes the bundled stylesheets to
/// `<output>/assets/`.
///
/// # Errors
///
/// Returns error if pages fail to load or output cannot be written
pub fn generate_site(config: &Config) -> Result<SiteReport> {
    let renderer = MarkdownRenderer::new();
    let pages = load_pages(&config.source, &renderer)?;

    if pages.is_empty() {
        tracing::warn!(source = %config.source.display(), "No markdown pages found");
    }

    fs::create_dir_all(&config.output).with_context(|| {
        format!(
            "Failed to create output directory: {}",
            config.output.display()
        )
    })?;
    write_css_assets(&config.output.join("assets"))?;

    let mut report = SiteReport::default();
    for page in &pages {
        let target = config.output.join(output_path(page.route()));
        write_page(&target, page)?;
        tracing::debug!(route = page.route(), path = %target.display(), "Generated page");
        report.routes.push(page.route().to_string());
    }

    tracing::info!(
        pages = report.page_count(),
        output = %config.output.display(),
        "Site generated"
    );
    Ok(report)
}

fn write_page(target: &Path, page: &Page) -> Result<()> {
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(target, page.render().into_string())
        .with_context(|| format!("Failed to write page: {}", target.display()))
}
