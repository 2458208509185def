//! Page layout wrapper component

use maud::{DOCTYPE, Markup, html};

use super::footer::site_footer;
use super::header::site_header;
use crate::content::PageContent;

/// Wraps page content in the header / main / footer shell
///
/// The header title comes from the page frontmatter, falling back to the
/// site default when it is missing or empty. The body is inserted into
/// the main region unmodified.
///
/// # Arguments
///
/// * `content`: Page body and metadata
///
/// # Returns
///
/// Shell markup without the surrounding HTML document
pub fn page_layout(content: &PageContent) -> Markup {
    html! {
        div class="flex flex-col min-h-screen" {
            (site_header(content.title()))
            main class="container mx-auto flex-1" {
                (content.body)
            }
            (site_footer())
        }
    }
}

/// Wraps the page shell in a complete HTML document
///
/// Provides DOCTYPE, charset, viewport and stylesheet loading. The
/// document title matches the header title.
///
/// # Arguments
///
/// * `content`: Page body and metadata
/// * `stylesheets`: CSS hrefs to link, relative to the page
///
/// # Returns
///
/// Complete HTML document
pub fn document(content: &PageContent, stylesheets: &[String]) -> Markup {
    let description = content
        .frontmatter
        .as_ref()
        .and_then(|fm| fm.description.as_deref());

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                @if let Some(description) = description {
                    meta name="description" content=(description);
                }
                title { (content.title()) }
                @for stylesheet in stylesheets {
                    link rel="stylesheet" href=(stylesheet);
                }
            }
            body {
                (page_layout(content))
            }
        }
    }
}
