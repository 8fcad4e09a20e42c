//! Analyzer configuration

use serde::{Deserialize, Serialize};

/// Configuration for discipline identification and theme detection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Minimum keyword hits for a discipline to be identified
    pub min_score: u32,

    /// Longest candidate theme phrase, in tokens (1-5)
    pub max_ngram: usize,

    /// Tokens on each side of a theme that count as qualifiers
    pub qualifier_window: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            min_score: 1,
            max_ngram: 3,
            qualifier_window: 3,
        }
    }
}

impl AnalyzerConfig {
    /// Strict preset: two keyword hits required, narrow qualifier window
    pub fn strict() -> Self {
        Self {
            min_score: 2,
            max_ngram: 3,
            qualifier_window: 2,
        }
    }

    /// Lenient preset: single hits, longer phrases and a wider window
    pub fn lenient() -> Self {
        Self {
            min_score: 1,
            max_ngram: 4,
            qualifier_window: 4,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.min_score == 0 {
            return Err("min_score must be at least 1".to_string());
        }
        if !(1..=5).contains(&self.max_ngram) {
            return Err(format!("max_ngram must be between 1 and 5, got {}", self.max_ngram));
        }
        if self.qualifier_window == 0 {
            return Err("qualifier_window must be at least 1".to_string());
        }
        Ok(())
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
    fn test_default_config() {
        let config = AnalyzerConfig::default();
        assert_eq!(config.min_score, 1);
        assert_eq!(config.max_ngram, 3);
        assert_eq!(config.qualifier_window, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_presets_validate() {
        assert!(AnalyzerConfig::strict().validate().is_ok());
        assert!(AnalyzerConfig::lenient().validate().is_ok());
        assert_eq!(AnalyzerConfig::strict().min_score, 2);
    }

    #[test]
    fn test_invalid_values() {
        let mut config = AnalyzerConfig::default();
        config.min_score = 0;
        assert!(config.validate().is_err());

        let mut config = AnalyzerConfig::default();
        config.max_ngram = 9;
        assert!(config.validate().is_err());

        let mut config = AnalyzerConfig::default();
        config.qualifier_window = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = AnalyzerConfig::lenient();
        let toml_str = config.to_toml().unwrap();
        assert_eq!(AnalyzerConfig::from_toml(&toml_str).unwrap(), config);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let parsed = AnalyzerConfig::from_toml("min_score = 3").unwrap();
        assert_eq!(parsed.min_score, 3);
        assert_eq!(parsed.max_ngram, 3);
    }
}
