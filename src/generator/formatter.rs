//! Comment text reflow
//!
//! Scraped paragraphs carry the page's own line breaks and indentation. They
//! are collapsed to single spaces and re-broken into lines of roughly
//! `width` characters, each continuation line starting with a caller-chosen
//! prefix.

/// How reflowed text is broken into lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrapPolicy {
    /// Running character count after which the next word starts a new line
    pub width: usize,

    /// Line break emitted before each continuation prefix
    pub line_ending: String,
}

impl Default for WrapPolicy {
    fn default() -> Self {
        Self {
            width: 80,
            line_ending: "\r\n".to_string(),
        }
    }
}

/// Reflows a text run into prefixed lines
///
/// The text is normalized first: `\r`, `\n` and `\t` become spaces, runs of
/// spaces collapse to one, and leading whitespace is removed. Words are then
/// emitted separated by single spaces. The width is checked *before* each
/// word is appended and only once the running count has gone past it, so a
/// line can run over `width` by the length of one word.
///
/// The first line carries no prefix; the caller writes it.
///
/// # Example
///
/// ```
/// use enum_scribe::generator::{reflow, WrapPolicy};
///
/// let text = reflow("  Generic\n\terror.", "   * ", &WrapPolicy::default());
/// assert_eq!(text, "Generic error.");
/// ```
pub fn reflow(text: &str, prefix: &str, policy: &WrapPolicy) -> String {
    let normalized = normalize_whitespace(text);

    let mut out = String::with_capacity(normalized.len());
    let mut chars = 0usize;

    for word in normalized.split(' ') {
        if chars > policy.width {
            chars = 0;
            out.push_str(&policy.line_ending);
            out.push_str(prefix);
        }
        if chars != 0 {
            out.push(' ');
            chars += 1;
        }
        chars += word.chars().count();
        out.push_str(word);
    }

    out
}

/// Maps line breaks and tabs to spaces, collapses space runs and trims the start
fn normalize_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut previous_space = false;

    for c in text.chars() {
        let c = match c {
            '\r' | '\n' | '\t' => ' ',
            other => other,
        };
        if c == ' ' {
            if previous_space {
                continue;
            }
            previous_space = true;
        } else {
            previous_space = false;
        }
        out.push(c);
    }

    out.trim_start().to_string()
}
