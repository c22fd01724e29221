//! Structured document model
//!
//! The generator never sees HTML directly. Pages are parsed into a small
//! ordered tree of [`DocNode`]s (elements with a tag name, and text runs),
//! which keeps heading selection and comment rendering testable with
//! hand-built trees.

mod html;
mod node;

pub use html::parse_document;
pub use node::DocNode;
