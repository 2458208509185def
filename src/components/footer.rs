//! Site footer component

use maud::{Markup, html};

/// Copyright line shown on every page.
pub const COPYRIGHT: &str = "© 2022 Byju's - The Learning App";

/// Renders the site footer with the copyright line
pub fn site_footer() -> Markup {
    html! {
        footer class="bg-fuchsia-100 mt-8 py-4" {
            div class="container mx-auto flex justify-center" {
                (COPYRIGHT)
            }
        }
    }
}
