//! Configuration for the section parser

use serde::{Deserialize, Serialize};

/// Headings that always mark the bibliography block
pub const DEFAULT_REFERENCE_ALIASES: &[&str] = &["References", "Bibliography", "Works Cited"];

/// Configuration for the section parser
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Heading level (1-6) that starts sections; `None` detects it
    pub heading_level: Option<u8>,

    /// Extra headings treated as the bibliography, matched case-insensitively
    pub reference_aliases: Vec<String>,

    /// Strip leading numbering such as "1." or "2.3" from section names
    pub strip_numbering: bool,
}

impl ParserConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if let Some(level) = self.heading_level {
            if !(1..=6).contains(&level) {
                return Err(format!("heading_level must be between 1 and 6, got {}", level));
            }
        }
        if self.reference_aliases.iter().any(|a| a.trim().is_empty()) {
            return Err("reference_aliases cannot contain empty names".to_string());
        }
        Ok(())
    }

    /// Whether a section name marks the bibliography
    pub fn is_reference_heading(&self, name: &str) -> bool {
        DEFAULT_REFERENCE_ALIASES
            .iter()
            .copied()
            .chain(self.reference_aliases.iter().map(String::as_str))
            .any(|alias| alias.trim().eq_ignore_ascii_case(name))
    }
}

impl Default for ParserConfig {
    /// Auto-detected heading level with numbering stripped
    fn default() -> Self {
        Self {
            heading_level: None,
            reference_aliases: Vec::new(),
            strip_numbering: true,
        }
    }
}

impl ParserConfig {
    /// Strict preset: level-2 sections only, names kept verbatim
    pub fn strict() -> Self {
        Self {
            heading_level: Some(2),
            reference_aliases: Vec::new(),
            strip_numbering: false,
        }
    }

    /// Lenient preset: auto-detected level and common reference synonyms
    pub fn lenient() -> Self {
        Self {
            heading_level: None,
            reference_aliases: vec![
                "Reference List".to_string(),
                "Literature Cited".to_string(),
                "Sources".to_string(),
                "Citations".to_string(),
            ],
            strip_numbering: true,
        }
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(ParserConfig::default().validate().is_ok());
    }

    #[test]
    fn test_presets_are_valid() {
        assert!(ParserConfig::strict().validate().is_ok());
        assert!(ParserConfig::lenient().validate().is_ok());
    }

    #[test]
    fn test_invalid_heading_level() {
        let config = ParserConfig {
            heading_level: Some(7),
            ..ParserConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_alias_rejected() {
        let config = ParserConfig {
            reference_aliases: vec!["  ".to_string()],
            ..ParserConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_reference_heading_matching() {
        let config = ParserConfig::lenient();
        assert!(config.is_reference_heading("references"));
        assert!(config.is_reference_heading("WORKS CITED"));
        assert!(config.is_reference_heading("Literature cited"));
        assert!(!config.is_reference_heading("Reference Frames"));
        assert!(!ParserConfig::default().is_reference_heading("Sources"));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = ParserConfig::lenient();
        let toml_str = config.to_toml().unwrap();
        let parsed = ParserConfig::from_toml(&toml_str).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let parsed = ParserConfig::from_toml("heading_level = 3").unwrap();
        assert_eq!(parsed.heading_level, Some(3));
        assert!(parsed.strip_numbering);
        assert!(parsed.reference_aliases.is_empty());
    }
}
