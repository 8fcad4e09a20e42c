//! Assembler configuration

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// What to do with text that precedes the first section heading
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreamblePolicy {
    /// Fill an unmatched Abstract slot, otherwise keep as a Preamble section
    #[default]
    Auto,
    /// Always use as the abstract
    Abstract,
    /// Always keep as a Preamble section
    Section,
    /// Drop it
    Discard,
}

impl PreamblePolicy {
    /// Parse a policy name
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Some(PreamblePolicy::Auto),
            "abstract" => Some(PreamblePolicy::Abstract),
            "section" => Some(PreamblePolicy::Section),
            "discard" => Some(PreamblePolicy::Discard),
            _ => None,
        }
    }
}

/// Configuration for assembly and validation rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssemblerConfig {
    /// Additional headings per slot name, e.g. `Findings = ["Outcomes"]`
    pub extra_aliases: BTreeMap<String, Vec<String>>,

    /// Preamble placement
    pub preamble_policy: PreamblePolicy,

    /// Name of the section that keeps an unplaced preamble
    pub preamble_section_name: String,

    /// Report template slots that exist but are empty
    pub flag_empty_slots: bool,
}

impl Default for AssemblerConfig {
    fn default() -> Self {
        Self {
            extra_aliases: BTreeMap::new(),
            preamble_policy: PreamblePolicy::Auto,
            preamble_section_name: "Preamble".to_string(),
            flag_empty_slots: true,
        }
    }
}

impl AssemblerConfig {
    /// Create a lenient configuration (common synonyms, empty slots tolerated)
    pub fn lenient() -> Self {
        let mut extra_aliases = BTreeMap::new();
        extra_aliases.insert(
            "Findings".to_string(),
            vec!["Outcomes".to_string(), "Observations".to_string()],
        );
        extra_aliases.insert(
            "Conclusion".to_string(),
            vec!["Final Thoughts".to_string(), "Closing Remarks".to_string()],
        );
        extra_aliases.insert("Introduction".to_string(), vec!["Background".to_string()]);

        Self {
            extra_aliases,
            preamble_policy: PreamblePolicy::Auto,
            preamble_section_name: "Preamble".to_string(),
            flag_empty_slots: false,
        }
    }

    /// Create a strict configuration (canonical aliases only, preamble kept apart)
    pub fn strict() -> Self {
        Self {
            extra_aliases: BTreeMap::new(),
            preamble_policy: PreamblePolicy::Section,
            preamble_section_name: "Preamble".to_string(),
            flag_empty_slots: true,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.preamble_section_name.trim().is_empty() {
            return Err("preamble_section_name cannot be empty".to_string());
        }
        for (slot, aliases) in &self.extra_aliases {
            if slot.trim().is_empty() {
                return Err("extra_aliases cannot contain an empty slot name".to_string());
            }
            if aliases.iter().any(|a| a.trim().is_empty()) {
                return Err(format!("extra_aliases for '{}' contain an empty alias", slot));
            }
        }
        Ok(())
    }

    /// Configured extra aliases for a slot, matched case-insensitively
    pub fn aliases_for<'a>(&'a self, slot: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.extra_aliases
            .iter()
            .filter(move |(name, _)| name.eq_ignore_ascii_case(slot))
            .flat_map(|(_, aliases)| aliases.iter().map(String::as_str))
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
        let config = AssemblerConfig::default();
        assert_eq!(config.preamble_policy, PreamblePolicy::Auto);
        assert!(config.flag_empty_slots);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_lenient_config() {
        let config = AssemblerConfig::lenient();
        assert!(!config.flag_empty_slots);
        assert_eq!(config.aliases_for("findings").count(), 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_aliases_for_temporary_slot_name() {
        let config = AssemblerConfig::lenient();
        let slot = String::from("FINDINGS");
        let aliases: Vec<&str> = config.aliases_for(&slot).collect();
        assert_eq!(aliases.len(), 2);
        assert_eq!(config.aliases_for(&String::from("Appendix")).count(), 0);
    }

    #[test]
    fn test_strict_config() {
        let config = AssemblerConfig::strict();
        assert_eq!(config.preamble_policy, PreamblePolicy::Section);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_alias_rejected() {
        let mut config = AssemblerConfig::default();
        config.extra_aliases.insert("Findings".to_string(), vec![String::new()]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = AssemblerConfig::lenient();
        let toml_str = config.to_toml().unwrap();
        let parsed = AssemblerConfig::from_toml(&toml_str).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_policy_from_toml() {
        let parsed = AssemblerConfig::from_toml(
            "preamble_policy = \"discard\"\n[extra_aliases]\nMethodology = [\"Approach\"]\n",
        )
        .unwrap();
        assert_eq!(parsed.preamble_policy, PreamblePolicy::Discard);
        assert_eq!(parsed.aliases_for("Methodology").collect::<Vec<_>>(), vec!["Approach"]);
        assert_eq!(parsed.preamble_section_name, "Preamble");
    }

    #[test]
    fn test_policy_parse() {
        assert_eq!(PreamblePolicy::parse("Section"), Some(PreamblePolicy::Section));
        assert_eq!(PreamblePolicy::parse("nope"), None);
    }
}
