/// A node of a structured document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocNode {
    /// An element with a lower-case tag name and ordered children
    Element { tag: String, children: Vec<DocNode> },

    /// A run of text
    Text(String),
}

impl DocNode {
    /// Creates an element node; the tag is lower-cased
    pub fn element(tag: &str, children: Vec<DocNode>) -> Self {
        DocNode::Element {
            tag: tag.to_ascii_lowercase(),
            children,
        }
    }

    /// Creates a text node
    pub fn text(text: impl Into<String>) -> Self {
        DocNode::Text(text.into())
    }

    /// Returns the tag name for elements, `None` for text
    pub fn tag(&self) -> Option<&str> {
        match self {
            DocNode::Element { tag, .. } => Some(tag.as_str()),
            DocNode::Text(_) => None,
        }
    }

    /// Returns true if this is an element with the given (lower-case) tag
    pub fn is_element(&self, tag: &str) -> bool {
        self.tag() == Some(tag)
    }

    /// Child nodes; always empty for text
    pub fn children(&self) -> &[DocNode] {
        match self {
            DocNode::Element { children, .. } => children.as_slice(),
            DocNode::Text(_) => &[],
        }
    }

    /// Concatenation of all descendant text in document order
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            DocNode::Text(text) => out.push_str(text),
            DocNode::Element { children, .. } => {
                for child in children {
                    child.collect_text(out);
                }
            }
        }
    }

    /// All descendant elements with the given tag, in document order
    ///
    /// The node itself is not included.
    pub fn descendants_with_tag<'a>(&'a self, tag: &str) -> Vec<&'a DocNode> {
        let mut found = Vec::new();
        for child in self.children() {
            child.collect_with_tag(tag, &mut found);
        }
        found
    }

    fn collect_with_tag<'a>(&'a self, tag: &str, found: &mut Vec<&'a DocNode>) {
        if self.is_element(tag) {
            found.push(self);
        }
        for child in self.children() {
            child.collect_with_tag(tag, found);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DocNode {
        DocNode::element(
            "OL",
            vec![
                DocNode::text("\n"),
                DocNode::element("li", vec![DocNode::text("first")]),
                DocNode::element(
                    "li",
                    vec![
                        DocNode::text("second "),
                        DocNode::element("b", vec![DocNode::text("bold")]),
                    ],
                ),
            ],
        )
    }

    #[test]
    fn test_tag_is_lowercased() {
        assert_eq!(sample().tag(), Some("ol"));
        assert!(sample().is_element("ol"));
        assert!(!DocNode::text("x").is_element("ol"));
    }

    #[test]
    fn test_text_content_in_document_order() {
        assert_eq!(sample().text_content(), "\nfirstsecond bold");
    }

    #[test]
    fn test_text_has_no_children() {
        assert!(DocNode::text("x").children().is_empty());
        assert_eq!(DocNode::text("x").tag(), None);
    }

    #[test]
    fn test_descendants_with_tag() {
        let root = sample();
        let items = root.descendants_with_tag("li");
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].text_content(), "first");
        assert_eq!(items[1].text_content(), "second bold");
        assert!(root.descendants_with_tag("ol").is_empty());
    }

    #[test]
    fn test_nested_descendants_are_preorder() {
        let root = DocNode::element(
            "ol",
            vec![
                DocNode::element(
                    "li",
                    vec![
                        DocNode::text("outer"),
                        DocNode::element(
                            "ol",
                            vec![DocNode::element("li", vec![DocNode::text("inner")])],
                        ),
                    ],
                ),
                DocNode::element("li", vec![DocNode::text("last")]),
            ],
        );
        let texts: Vec<String> = root
            .descendants_with_tag("li")
            .iter()
            .map(|li| li.text_content())
            .collect();
        assert_eq!(texts, vec!["outerinner", "inner", "last"]);
    }
}
