use serde::Deserialize;

/// Main configuration structure for Enum-Scribe
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub selector: SelectorConfig,
    pub template: TemplateConfig,
    pub format: FormatConfig,
    pub clipboard: ClipboardConfig,
}

/// Which headings describe an enumeration entry
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    /// Tag name of the heading elements (e.g. "h3")
    #[serde(rename = "heading-tag")]
    pub heading_tag: String,

    /// Prefix stripped from the documented name (e.g. "SQLITE_")
    #[serde(rename = "code-prefix")]
    pub code_prefix: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            heading_tag: "h3".to_string(),
            code_prefix: "SQLITE_".to_string(),
        }
    }
}

/// Surrounding source template
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// First line of the generated file
    #[serde(rename = "header-guard")]
    pub header_guard: String,

    /// Namespace wrapping the enumeration (may contain `::`)
    pub namespace: String,

    /// Name of the generated `enum class`
    #[serde(rename = "enum-name")]
    pub enum_name: String,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            header_guard: "#pragma once".to_string(),
            namespace: "sqlitepp".to_string(),
            enum_name: "ResultCode".to_string(),
        }
    }
}

/// Comment reflow and entry layout
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    /// Running character count after which a comment line is broken
    #[serde(rename = "wrap-width")]
    pub wrap_width: usize,

    /// Width of `NAME = ` plus padding before the code number
    #[serde(rename = "value-column")]
    pub value_column: usize,

    /// Line break inserted when reflowing comment text
    #[serde(rename = "wrap-line-ending")]
    pub wrap_line_ending: String,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            wrap_width: 80,
            value_column: 25,
            wrap_line_ending: "\r\n".to_string(),
        }
    }
}

/// Clipboard command override
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ClipboardConfig {
    /// Program and arguments receiving the listing on stdin.
    /// When unset the first available platform tool is used.
    pub command: Option<Vec<String>>,
}
