//! Description fragments to documentation comments

use crate::document::DocNode;
use crate::generator::formatter::{reflow, WrapPolicy};

/// Prefix of every line inside a comment block
pub const LINE_PREFIX: &str = "   * ";

/// Opening delimiter line of a comment block
pub const BLOCK_OPEN: &str = "  /**\n";

/// Closing delimiter line of a comment block
pub const BLOCK_CLOSE: &str = "   **/\n";

/// Renders one description node as comment lines
///
/// Paragraphs become one reflowed line. Ordered lists become one numbered
/// line per `li` descendant, numbered from 1 in document order, with
/// continuation lines indented past the number. Any other node renders
/// nothing, as does a list without items.
pub fn stringify_node(node: &DocNode, policy: &WrapPolicy) -> Option<String> {
    match node.tag()? {
        "p" => Some(format!(
            "{}{}\n",
            LINE_PREFIX,
            reflow(&node.text_content(), LINE_PREFIX, policy)
        )),
        "ol" => {
            let items = node.descendants_with_tag("li");
            if items.is_empty() {
                tracing::warn!("Ordered list without items in description, skipping");
                return None;
            }

            let continuation = format!("{}    ", LINE_PREFIX);
            let mut out = String::new();
            for (index, item) in items.iter().enumerate() {
                out.push_str(&format!(
                    "{} {}. {}\n",
                    LINE_PREFIX,
                    index + 1,
                    reflow(&item.text_content(), &continuation, policy)
                ));
            }
            Some(out)
        }
        other => {
            tracing::trace!("Ignoring <{}> in description", other);
            None
        }
    }
}

/// Renders a whole description fragment as a delimited comment block
///
/// Rendered nodes are separated by a blank line. Returns `None` when no node
/// rendered anything, so entries without a description get no empty block.
pub fn stringify_description(nodes: &[&DocNode], policy: &WrapPolicy) -> Option<String> {
    let rendered: Vec<String> = nodes
        .iter()
        .filter_map(|node| stringify_node(node, policy))
        .collect();

    if rendered.is_empty() {
        return None;
    }

    Some(format!("{}{}{}", BLOCK_OPEN, rendered.join("\n"), BLOCK_CLOSE))
}
