//! Listing generation
//!
//! This module turns a parsed documentation page into a source listing:
//! - `selector`: finds code headings and their description fragments
//! - `stringify`: renders fragments as documentation comments
//! - `formatter`: reflows comment text into fixed-width lines
//! - `assembly`: lays out entries and wraps them in the source template

mod assembly;
mod formatter;
mod selector;
mod stringify;

pub use assembly::{format_entry_line, generate, render_listing, EnumEntry, GeneratedListing};
pub use formatter::{reflow, WrapPolicy};
pub use selector::{select_headings, HeadingCode, HeadingMatch, HeadingPattern};
pub use stringify::{stringify_description, stringify_node, LINE_PREFIX};
