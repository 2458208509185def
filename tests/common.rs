//! Shared test utilities for integration tests.
//!
//! Provides helpers for laying out temporary pages directories used
//! across multiple test files.

#![allow(dead_code)]

use anyhow::Result;
use std::path::Path;
use tempfile::TempDir;

/// Creates temporary workspace with an empty `pages` directory.
///
/// # Errors
///
/// Returns error if directory creation fails
pub fn create_workspace() -> Result<TempDir> {
    let dir = TempDir::new()?;
    std::fs::create_dir_all(dir.path().join("pages"))?;
    Ok(dir)
}

/// Writes page source under the workspace `pages` directory, creating
/// parent directories as needed.
///
/// # Errors
///
/// Returns error if directory creation or file write fails
pub fn write_page(workspace: &Path, path: &str, content: &str) -> Result<()> {
    let file_path = workspace.join("pages").join(path);
    if let Some(parent) = file_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(file_path, content)?;
    Ok(())
}

/// Builds markdown source with a YAML frontmatter title.
pub fn with_title(title: &str, body: &str) -> String {
    format!("---\ntitle: {}\n---\n{}", title, body)
}

/// Extracts the text of the header title label from a rendered page.
pub fn header_title(html: &str) -> Option<&str> {
    let open = "<span class=\"mx-auto\">";
    let start = html.find(open)? + open.len();
    let end = html[start..].find("</span>")? + start;
    Some(&html[start..end])
}
