//! HTML front end for the document model

use crate::document::node::DocNode;
use scraper::{ElementRef, Html, Node};

/// Parses an HTML page into a document tree rooted at `<html>`
///
/// Parsing is lenient (html5ever recovers from malformed markup), so this
/// never fails. Comments, doctypes and processing instructions are dropped.
///
/// # Example
///
/// ```
/// use enum_scribe::document::parse_document;
///
/// let doc = parse_document("<h3>(1) SQLITE_ERROR</h3><p>Generic error.</p>");
/// assert_eq!(doc.descendants_with_tag("h3").len(), 1);
/// ```
pub fn parse_document(html: &str) -> DocNode {
    let document = Html::parse_document(html);
    let root = convert_element(document.root_element());

    tracing::debug!(
        "Parsed document with {} top-level nodes",
        root.children().len()
    );

    root
}

/// Converts a scraper element and its subtree
fn convert_element(element: ElementRef<'_>) -> DocNode {
    let children = element
        .children()
        .filter_map(|child| match child.value() {
            Node::Element(_) => ElementRef::wrap(child).map(convert_element),
            Node::Text(text) => Some(DocNode::text(text.text.to_string())),
            _ => None,
        })
        .collect();

    DocNode::element(element.value().name(), children)
}
