//! Page content and frontmatter metadata

use anyhow::{Context, Result};
use maud::{Markup, PreEscaped};
use serde::Deserialize;

/// Title shown when a page carries no usable frontmatter title.
pub const DEFAULT_TITLE: &str = "Introduction to Next.Js";

const DELIMITER: &str = "---";

/// Page level metadata supplied at the top of a markdown source.
///
/// Only the keys the layout reads are typed. Unknown keys are accepted
/// and dropped so pages written for other toolchains still load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Frontmatter {
    pub title: Option<String>,
    pub description: Option<String>,
}

impl Frontmatter {
    /// Creates frontmatter carrying only a title.
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    /// Splits a YAML frontmatter block off the start of a markdown source.
    ///
    /// The block opens with a `---` line and closes with the next `---`
    /// line. Sources without a complete block are returned untouched with
    /// no metadata. An empty block yields default metadata.
    ///
    /// # Arguments
    ///
    /// * `source`: Raw markdown source text
    ///
    /// # Returns
    ///
    /// Parsed metadata (if a block was present) and the remaining body
    ///
    /// # Errors
    ///
    /// Returns error if the block is present but is not valid YAML for
    /// this structure
    pub fn parse(source: &str) -> Result<(Option<Self>, &str)> {
        let Some(rest) = strip_opening_delimiter(source) else {
            return Ok((None, source));
        };

        let mut offset = 0;
        for line in rest.split_inclusive('\n') {
            if line.trim_end_matches(['\r', '\n']) == DELIMITER {
                let yaml = &rest[..offset];
                let body = &rest[offset + line.len()..];

                if yaml.trim().is_empty() {
                    return Ok((Some(Self::default()), body));
                }

                let frontmatter: Self =
                    serde_yaml::from_str(yaml).context("Invalid YAML frontmatter")?;
                return Ok((Some(frontmatter), body));
            }
            offset += line.len();
        }

        Ok((None, source))
    }
}

fn strip_opening_delimiter(source: &str) -> Option<&str> {
    let source = source.strip_prefix('\u{feff}').unwrap_or(source);
    let (first, rest) = source.split_once('\n')?;
    (first.trim_end_matches('\r') == DELIMITER).then_some(rest)
}

/// Resolves the title displayed for a page.
///
/// Falls back to [`DEFAULT_TITLE`] when metadata is missing, carries no
/// title, or carries an empty title.
pub fn resolve_title(frontmatter: Option<&Frontmatter>) -> &str {
    frontmatter
        .and_then(|fm| fm.title.as_deref())
        .filter(|title| !title.is_empty())
        .unwrap_or(DEFAULT_TITLE)
}

/// Renderable page body paired with its optional metadata.
#[derive(Debug, Clone)]
pub struct PageContent {
    pub frontmatter: Option<Frontmatter>,
    pub body: Markup,
}

impl PageContent {
    /// Pairs rendered markup with optional metadata.
    pub fn new(frontmatter: Option<Frontmatter>, body: Markup) -> Self {
        Self { frontmatter, body }
    }

    /// Wraps pre-rendered HTML, typically markdown output.
    pub fn from_html(frontmatter: Option<Frontmatter>, html: String) -> Self {
        Self::new(frontmatter, PreEscaped(html))
    }

    /// Title shown in the page header, with the default fallback applied.
    pub fn title(&self) -> &str {
        resolve_title(self.frontmatter.as_ref())
    }
}
