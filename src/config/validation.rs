use crate::config::types::{ClipboardConfig, Config, FormatConfig, SelectorConfig, TemplateConfig};
use crate::ConfigError;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_selector_config(&config.selector)?;
    validate_template_config(&config.template)?;
    validate_format_config(&config.format)?;
    validate_clipboard_config(&config.clipboard)?;
    Ok(())
}

/// Validates heading selection settings
fn validate_selector_config(config: &SelectorConfig) -> Result<(), ConfigError> {
    if config.heading_tag.is_empty() {
        return Err(ConfigError::Validation(
            "heading-tag cannot be empty".to_string(),
        ));
    }

    if !config.heading_tag.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(ConfigError::Validation(format!(
            "heading-tag must be an element name, got '{}'",
            config.heading_tag
        )));
    }

    // An empty prefix is allowed: the whole upper-case name is kept
    if !config
        .code_prefix
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        return Err(ConfigError::Validation(format!(
            "code-prefix must contain only alphanumeric characters and underscores, got '{}'",
            config.code_prefix
        )));
    }

    Ok(())
}

/// Validates the source template
fn validate_template_config(config: &TemplateConfig) -> Result<(), ConfigError> {
    if config.header_guard.trim().is_empty() {
        return Err(ConfigError::Validation(
            "header-guard cannot be empty".to_string(),
        ));
    }

    if config.header_guard.contains(|c| c == '\r' || c == '\n') {
        return Err(ConfigError::Validation(
            "header-guard must be a single line".to_string(),
        ));
    }

    if config.namespace.is_empty() {
        return Err(ConfigError::InvalidIdentifier(
            "namespace cannot be empty".to_string(),
        ));
    }

    for segment in config.namespace.split("::") {
        validate_identifier(segment)?;
    }

    validate_identifier(&config.enum_name)?;

    Ok(())
}

/// Validates reflow and layout settings
fn validate_format_config(config: &FormatConfig) -> Result<(), ConfigError> {
    if config.wrap_width < 1 {
        return Err(ConfigError::Validation(format!(
            "wrap-width must be >= 1, got {}",
            config.wrap_width
        )));
    }

    if config.value_column < 1 {
        return Err(ConfigError::Validation(format!(
            "value-column must be >= 1, got {}",
            config.value_column
        )));
    }

    if config.wrap_line_ending != "\n" && config.wrap_line_ending != "\r\n" {
        return Err(ConfigError::Validation(format!(
            "wrap-line-ending must be \"\\n\" or \"\\r\\n\", got {:?}",
            config.wrap_line_ending
        )));
    }

    Ok(())
}

/// Validates the clipboard command override
fn validate_clipboard_config(config: &ClipboardConfig) -> Result<(), ConfigError> {
    if let Some(command) = &config.command {
        match command.first() {
            None => {
                return Err(ConfigError::Validation(
                    "clipboard command cannot be empty".to_string(),
                ))
            }
            Some(program) if program.trim().is_empty() => {
                return Err(ConfigError::Validation(
                    "clipboard program cannot be empty".to_string(),
                ))
            }
            Some(_) => {}
        }
    }

    Ok(())
}

/// Validates a C++ identifier (ASCII only)
fn validate_identifier(ident: &str) -> Result<(), ConfigError> {
    let mut chars = ident.chars();

    let Some(first) = chars.next() else {
        return Err(ConfigError::InvalidIdentifier(
            "identifier cannot be empty".to_string(),
        ));
    };

    if !(first.is_ascii_alphabetic() || first == '_') {
        return Err(ConfigError::InvalidIdentifier(format!(
            "'{}' must start with a letter or underscore",
            ident
        )));
    }

    if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(ConfigError::InvalidIdentifier(format!(
            "'{}' contains invalid characters",
            ident
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate(&Config::default()).is_ok());
    }

    #[test]
    fn test_validate_identifier() {
        assert!(validate_identifier("ResultCode").is_ok());
        assert!(validate_identifier("_private").is_ok());
        assert!(validate_identifier("v2").is_ok());

        assert!(validate_identifier("").is_err());
        assert!(validate_identifier("2fast").is_err());
        assert!(validate_identifier("has-dash").is_err());
        assert!(validate_identifier("has space").is_err());
    }

    #[test]
    fn test_validate_namespace() {
        let mut template = TemplateConfig::default();
        template.namespace = "outer::inner".to_string();
        assert!(validate_template_config(&template).is_ok());

        template.namespace = "outer::".to_string();
        assert!(matches!(
            validate_template_config(&template),
            Err(ConfigError::InvalidIdentifier(_))
        ));

        template.namespace = String::new();
        assert!(validate_template_config(&template).is_err());
    }

    #[test]
    fn test_validate_header_guard() {
        let mut template = TemplateConfig::default();
        template.header_guard = "#ifndef A\n#define A".to_string();
        assert!(validate_template_config(&template).is_err());

        template.header_guard = "   ".to_string();
        assert!(validate_template_config(&template).is_err());
    }

    #[test]
    fn test_validate_selector() {
        let mut selector = SelectorConfig::default();
        assert!(validate_selector_config(&selector).is_ok());

        selector.code_prefix = String::new();
        assert!(validate_selector_config(&selector).is_ok());

        selector.code_prefix = "SQLITE-".to_string();
        assert!(validate_selector_config(&selector).is_err());

        selector.code_prefix = "SQLITE_".to_string();
        selector.heading_tag = "h3.code".to_string();
        assert!(validate_selector_config(&selector).is_err());
    }

    #[test]
    fn test_validate_format() {
        let mut format = FormatConfig::default();
        assert!(validate_format_config(&format).is_ok());

        format.wrap_line_ending = "\n".to_string();
        assert!(validate_format_config(&format).is_ok());

        format.wrap_line_ending = "\r".to_string();
        assert!(validate_format_config(&format).is_err());

        format.wrap_line_ending = "\n".to_string();
        format.value_column = 0;
        assert!(validate_format_config(&format).is_err());
    }

    #[test]
    fn test_validate_clipboard() {
        assert!(validate_clipboard_config(&ClipboardConfig { command: None }).is_ok());
        assert!(validate_clipboard_config(&ClipboardConfig {
            command: Some(vec!["xclip".to_string(), "-selection".to_string()])
        })
        .is_ok());
        assert!(validate_clipboard_config(&ClipboardConfig {
            command: Some(vec![])
        })
        .is_err());
        assert!(validate_clipboard_config(&ClipboardConfig {
            command: Some(vec![" ".to_string()])
        })
        .is_err());
    }
}
