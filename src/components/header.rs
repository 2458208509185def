//! Site banner component

use maud::{Markup, html};

/// Route the home link points to.
pub const HOME_ROUTE: &str = "/";

/// Icon rendered inside the home link.
pub const HOME_ICON: &str = "🏡";

/// Renders the site banner
///
/// Shows a home link on the left and the page title centered in the
/// remaining space.
///
/// # Arguments
///
/// * `title`: Resolved page title
///
/// # Returns
///
/// Header markup
pub fn site_header(title: &str) -> Markup {
    html! {
        header class="bg-fuchsia-100 mb-8 py-4" {
            div class="container mx-auto flex justify-center" {
                a href=(HOME_ROUTE) { (HOME_ICON) }
                span class="mx-auto" { (title) }
                " "
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_header_structure() {
        // Arrange & Act
        let html = site_header("Chapter 1").into_string();

        // Assert
        assert!(html.starts_with("<header class=\"bg-fuchsia-100 mb-8 py-4\">"));
        assert!(html.contains("<a href=\"/\">🏡</a>"));
        assert!(html.contains("<span class=\"mx-auto\">Chapter 1</span> </div>"));
    }

    #[test]
    fn test_site_header_escapes_title() {
        // Arrange & Act
        let html = site_header("<script>").into_string();

        // Assert
        assert!(html.contains("&lt;script&gt;"), "Title must be escaped");
        assert!(!html.contains("<script>"));
    }
}
