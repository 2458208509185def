//! CSS asset bundling

use anyhow::{Context, Result};
use std::{fs, path::Path};

const BASE: &str = include_str!("../assets/base.css");
const UTILITIES: &str = include_str!("../assets/components/utilities.css");
const SHELL: &str = include_str!("../assets/components/shell.css");
const MARKDOWN: &str = include_str!("../assets/markdown.css");

/// Bundled stylesheets, by file name, in the order pages link them.
pub const STYLESHEETS: &[(&str, &[&str])] = &[
    ("layout.css", &[BASE, UTILITIES, SHELL]),
    ("markdown.css", &[MARKDOWN]),
];

/// Writes all bundled CSS assets to the output assets directory
pub fn write_css_assets(assets_dir: &Path) -> Result<()> {
    fs::create_dir_all(assets_dir).with_context(|| {
        format!(
            "Failed to create assets directory: {}",
            assets_dir.display()
        )
    })?;

    for (name, parts) in STYLESHEETS {
        write_bundled(assets_dir, name, parts)?;
    }
    Ok(())
}

fn write_bundled(dir: &Path, name: &str, parts: &[&str]) -> Result<()> {
    let css = parts.join("\n");
    fs::write(dir.join(name), css)
        .with_context(|| format!("Failed to write CSS asset: {}", name))?;
    tracing::debug!(asset = name, "Wrote stylesheet");
    Ok(())
}
