//! Reusable HTML components for page generation
//!
//! Maud component functions that make up the page shell. Every generated
//! page is wrapped by `layout`, which composes the header and footer
//! regions around the rendered markdown.

pub mod footer;
pub mod header;
pub mod layout;
