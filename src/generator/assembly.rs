//! Listing assembly
//!
//! Drives selection and rendering for a whole document and produces a
//! [`GeneratedListing`]. Nothing is written anywhere here; callers hand the
//! listing to an [`OutputSink`](crate::output::OutputSink).

use crate::config::{Config, FormatConfig, TemplateConfig};
use crate::document::DocNode;
use crate::generator::formatter::WrapPolicy;
use crate::generator::selector::{select_headings, HeadingPattern};
use crate::generator::stringify::stringify_description;
use crate::Result;

const NL: &str = "\n";

/// One generated enumeration entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumEntry {
    /// Name without the code prefix (e.g. "ERROR")
    pub name: String,

    /// Numeric code (e.g. 1)
    pub code: u32,

    /// Rendered comment block, delimiters included
    pub doc: Option<String>,
}

/// The result of one generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedListing {
    /// Entries in document order
    pub entries: Vec<EnumEntry>,

    /// The complete source text
    pub code: String,
}

impl GeneratedListing {
    /// Returns true if no heading produced an entry
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Generates the listing for a parsed document
///
/// # Arguments
///
/// * `root` - The document tree
/// * `config` - Selector, template and format settings
///
/// # Returns
///
/// * `Ok(GeneratedListing)` - Entries in heading order plus the rendered source
/// * `Err(ScribeError)` - A code heading could not be turned into an entry;
///   nothing is produced for the other headings either
///
/// # Example
///
/// ```
/// use enum_scribe::{generate, parse_document, Config};
///
/// let doc = parse_document("<h3>(1) SQLITE_ERROR</h3><p>Generic error.</p>");
/// let listing = generate(&doc, &Config::default()).unwrap();
/// assert_eq!(listing.entries[0].name, "ERROR");
/// assert!(listing.code.contains("   * Generic error.\n"));
/// ```
pub fn generate(root: &DocNode, config: &Config) -> Result<GeneratedListing> {
    let pattern = HeadingPattern::new(&config.selector)?;
    let policy = WrapPolicy {
        width: config.format.wrap_width,
        line_ending: config.format.wrap_line_ending.clone(),
    };

    let mut entries = Vec::new();
    for matched in select_headings(root, &pattern) {
        let doc = stringify_description(&matched.description, &policy);
        let heading = pattern.extract(&matched.heading.text_content())?;

        tracing::debug!(
            "Entry {} = {} ({} description nodes)",
            heading.name,
            heading.code,
            matched.description.len()
        );

        entries.push(EnumEntry {
            name: heading.name,
            code: heading.code,
            doc,
        });
    }

    let code = render_listing(&entries, &config.template, &config.format);

    tracing::info!(
        "Generated {} entries ({} documented)",
        entries.len(),
        entries.iter().filter(|e| e.doc.is_some()).count()
    );

    Ok(GeneratedListing { entries, code })
}

/// Renders entries into the source template
pub fn render_listing(
    entries: &[EnumEntry],
    template: &TemplateConfig,
    format: &FormatConfig,
) -> String {
    let mut code = String::new();

    code.push_str(&template.header_guard);
    code.push_str(NL);
    code.push_str(NL);
    code.push_str(&format!("namespace {}{}", template.namespace, NL));
    code.push('{');
    code.push_str(NL);
    code.push_str(NL);
    code.push_str(&format!("enum class {}{}", template.enum_name, NL));
    code.push('{');
    code.push_str(NL);

    for entry in entries {
        if let Some(doc) = &entry.doc {
            code.push_str(doc);
        }
        code.push_str(&format_entry_line(&entry.name, entry.code, format.value_column));
        code.push_str(NL);
    }

    code.push_str("};");
    code.push_str(NL);
    code.push('}');
    code.push_str(NL);

    code
}

/// Formats one `NAME = <padding>NUMBER,` line, indented by two spaces
///
/// The padding makes `NAME = ` plus padding exactly `value_column`
/// characters wide; names too long for the column get no padding.
pub fn format_entry_line(name: &str, code: u32, value_column: usize) -> String {
    let label = format!("{} = ", name);
    let padding = value_column.saturating_sub(label.chars().count());
    format!("  {}{}{},", label, " ".repeat(padding), code)
}
