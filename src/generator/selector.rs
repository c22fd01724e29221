//! Heading selection
//!
//! Finds the headings that document one code each and pairs every heading
//! with the element siblings that follow it up to the next heading.

use crate::config::SelectorConfig;
use crate::document::DocNode;
use crate::ScribeError;
use regex::Regex;

/// A heading together with its description fragment
#[derive(Debug, Clone)]
pub struct HeadingMatch<'a> {
    /// The heading element
    pub heading: &'a DocNode,

    /// Element siblings after the heading, up to the next heading
    pub description: Vec<&'a DocNode>,
}

/// Code number and name extracted from a heading
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingCode {
    pub code: u32,
    pub name: String,
}

/// Compiled heading patterns for one selector configuration
#[derive(Debug, Clone)]
pub struct HeadingPattern {
    tag: String,
    code: Regex,
    entry: Regex,
}

impl HeadingPattern {
    /// Compiles the patterns for the given selector settings
    pub fn new(config: &SelectorConfig) -> Result<Self, ScribeError> {
        // ASCII digits only
        let code = Regex::new(r"\([0-9]+\)")?;
        let entry = Regex::new(&format!(
            r"\(([0-9]+)\)\s*{}([A-Z_]+)",
            regex::escape(&config.code_prefix)
        ))?;

        Ok(Self {
            tag: config.heading_tag.to_ascii_lowercase(),
            code,
            entry,
        })
    }

    /// Returns true if the node is a heading whose text carries a `(<digits>)` code
    ///
    /// Only ASCII digits count.
    pub fn is_code_heading(&self, node: &DocNode) -> bool {
        node.is_element(&self.tag) && self.code.is_match(&node.text_content())
    }

    /// Extracts the code number and prefix-less name from heading text
    ///
    /// # Errors
    ///
    /// * `ScribeError::HeadingMismatch` - The text does not carry `(<digits>) <PREFIX><NAME>`
    /// * `ScribeError::InvalidCode` - The number does not fit in a `u32`
    pub fn extract(&self, text: &str) -> Result<HeadingCode, ScribeError> {
        let captures = self
            .entry
            .captures(text)
            .ok_or_else(|| ScribeError::HeadingMismatch {
                text: text.to_string(),
            })?;

        let code = captures[1]
            .parse::<u32>()
            .map_err(|source| ScribeError::InvalidCode {
                text: text.to_string(),
                source,
            })?;

        Ok(HeadingCode {
            code,
            name: captures[2].to_string(),
        })
    }
}

/// Finds all code headings in document order
///
/// A heading's description stops at the next element carrying the heading
/// tag, whether or not that element is itself a code heading.
///
/// # Arguments
///
/// * `root` - The document tree
/// * `pattern` - Compiled heading patterns
///
/// # Returns
///
/// The matches in the order the headings appear in the document; empty if
/// nothing matches.
pub fn select_headings<'a>(root: &'a DocNode, pattern: &HeadingPattern) -> Vec<HeadingMatch<'a>> {
    let mut matches = Vec::new();
    visit(root, pattern, &mut matches);

    tracing::debug!("Selected {} code headings", matches.len());
    matches
}

fn visit<'a>(node: &'a DocNode, pattern: &HeadingPattern, matches: &mut Vec<HeadingMatch<'a>>) {
    let children = node.children();

    for (index, child) in children.iter().enumerate() {
        if pattern.is_code_heading(child) {
            matches.push(HeadingMatch {
                heading: child,
                description: following_elements(&children[index + 1..], &pattern.tag),
            });
        }
        visit(child, pattern, matches);
    }
}

/// Element siblings up to (not including) the next element with `stop_tag`
fn following_elements<'a>(siblings: &'a [DocNode], stop_tag: &str) -> Vec<&'a DocNode> {
    siblings
        .iter()
        .filter(|node| node.tag().is_some())
        .take_while(|node| !node.is_element(stop_tag))
        .collect()
}
