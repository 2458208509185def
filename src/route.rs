//! Source path to URL route mapping

use anyhow::{Result, bail};
use std::path::{Component, Path, PathBuf};

/// File extensions treated as page sources.
pub const PAGE_EXTENSIONS: &[&str] = &["md", "mdx"];

/// Returns true if the path has a page source extension.
pub fn is_page_source(path: impl AsRef<Path>) -> bool {
    path.as_ref()
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| PAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Maps a page source path to its URL route.
///
/// Follows file based routing: `index` files serve their directory and
/// every other page is served as a directory of its own. Routes always
/// start and end with a slash.
///
/// # Arguments
///
/// * `relative`: Source path relative to the pages root
///
/// # Returns
///
/// Route such as `/`, `/intro/` or `/guide/setup/`
///
/// # Errors
///
/// Returns error if the path is absolute, escapes the pages root, has no
/// file stem, or contains non UTF8 components
pub fn route_for(relative: impl AsRef<Path>) -> Result<String> {
    let relative = relative.as_ref();
    let mut segments = Vec::new();

    for component in relative.parent().into_iter().flat_map(|p| p.components()) {
        match component {
            Component::Normal(name) => match name.to_str() {
                Some(name) => segments.push(name),
                None => bail!("Non UTF8 path component in {}", relative.display()),
            },
            Component::CurDir => {}
            Component::ParentDir => bail!("Path escapes pages root: {}", relative.display()),
            Component::RootDir | Component::Prefix(_) => {
                bail!("Absolute paths not allowed: {}", relative.display())
            }
        }
    }

    let Some(stem) = relative.file_stem().and_then(|s| s.to_str()) else {
        bail!("Cannot derive route from path: {}", relative.display());
    };
    if stem != "index" {
        segments.push(stem);
    }

    if segments.is_empty() {
        return Ok("/".to_string());
    }
    Ok(format!("/{}/", segments.join("/")))
}

/// Returns the output file for a route, relative to the output root.
pub fn output_path(route: &str) -> PathBuf {
    let mut path = PathBuf::new();
    for segment in route.split('/').filter(|s| !s.is_empty()) {
        path.push(segment);
    }
    path.push("index.html");
    path
}

/// Calculates relative path depth for a route.
///
/// Number of `../` prefixes needed to reach the site root from the page
/// generated for this route.
pub fn depth(route: &str) -> usize {
    route.split('/').filter(|s| !s.is_empty()).count()
}

/// Builds an href to a site root relative asset from the page at `route`.
pub fn asset_href(route: &str, asset: &str) -> String {
    format!("{}{}", "../".repeat(depth(route)), asset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_routes() {
        assert_eq!(route_for("index.md").unwrap(), "/");
        assert_eq!(route_for("guide/index.md").unwrap(), "/guide/");
        assert_eq!(route_for("./index.mdx").unwrap(), "/");
    }

    #[test]
    fn test_page_routes() {
        assert_eq!(route_for("intro.md").unwrap(), "/intro/");
        assert_eq!(route_for("guide/setup.mdx").unwrap(), "/guide/setup/");
        assert_eq!(route_for("a/b/c.md").unwrap(), "/a/b/c/");
    }

    #[test]
    fn test_rejects_traversal() {
        // Arrange & Act
        let result = route_for("../secret.md");

        // Assert
        assert!(result.is_err(), "Parent components should be rejected");
        assert!(result.unwrap_err().to_string().contains("escapes"));
    }

    #[test]
    fn test_rejects_absolute() {
        assert!(route_for("/etc/page.md").is_err());
    }

    #[test]
    fn test_output_path() {
        assert_eq!(output_path("/"), PathBuf::from("index.html"));
        assert_eq!(output_path("/intro/"), PathBuf::from("intro/index.html"));
        assert_eq!(
            output_path("/guide/setup/"),
            PathBuf::from("guide/setup/index.html")
        );
    }

    #[test]
    fn test_depth_and_asset_href() {
        assert_eq!(depth("/"), 0);
        assert_eq!(depth("/intro/"), 1);
        assert_eq!(depth("/guide/setup/"), 2);
        assert_eq!(asset_href("/", "assets/layout.css"), "assets/layout.css");
        assert_eq!(
            asset_href("/guide/setup/", "assets/layout.css"),
            "../../assets/layout.css"
        );
    }

    #[test]
    fn test_is_page_source() {
        assert!(is_page_source("intro.md"));
        assert!(is_page_source("guide/setup.MDX"));
        assert!(!is_page_source("image.png"));
        assert!(!is_page_source("README"));
    }
}
