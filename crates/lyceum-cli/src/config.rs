//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use lyceum_assembler::AssemblerConfig;
use lyceum_citations::resolve_style;
use lyceum_domain::{CitationStyle, DisciplineTag, OutputFormat};
use lyceum_parser::ParserConfig;
use lyceum_synthesizer::AnalyzerConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Defaults applied when flags are absent
    #[serde(default)]
    pub defaults: Defaults,

    /// Section parser settings
    #[serde(default)]
    pub parser: ParserConfig,

    /// Report assembler settings
    #[serde(default)]
    pub assembler: AssemblerConfig,

    /// Interdisciplinary analyzer settings
    #[serde(default)]
    pub analyzer: AnalyzerConfig,
}

/// Default report settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Defaults {
    /// Citation style name
    #[serde(default = "default_style")]
    pub style: String,

    /// Report format name
    #[serde(default = "default_format")]
    pub format: String,

    /// Discipline tag ("general" or a discipline name)
    #[serde(default = "default_discipline")]
    pub discipline: String,

    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output mode
    #[serde(default = "default_output")]
    pub output: OutputMode,
}

/// Output mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Markdown reports and tables
    Text,
    /// JSON format
    Json,
    /// Quiet (minimal) format
    Quiet,
}

impl Config {
    /// Get the default configuration file path.
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".lyceum").join("config.toml"))
    }

    /// Resolve an explicit path or fall back to the default one.
    pub fn resolve_path(path: Option<&Path>) -> Result<PathBuf> {
        match path {
            Some(path) => Ok(path.to_path_buf()),
            None => Self::default_path(),
        }
    }

    /// Load configuration from file, or defaults when it does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = self.to_toml()?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Serialize to TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))
    }

    /// Validate defaults and every component section.
    pub fn validate(&self) -> Result<()> {
        self.style()?;
        self.format()?;
        self.discipline()?;
        self.parser.validate().map_err(CliError::Config)?;
        self.assembler.validate().map_err(CliError::Config)?;
        self.analyzer.validate().map_err(CliError::Config)?;
        Ok(())
    }

    /// Default citation style.
    pub fn style(&self) -> Result<CitationStyle> {
        Ok(resolve_style(&self.defaults.style)?)
    }

    /// Default report format.
    pub fn format(&self) -> Result<OutputFormat> {
        parse_format(&self.defaults.format)
    }

    /// Default discipline tag.
    pub fn discipline(&self) -> Result<DisciplineTag> {
        parse_discipline_tag(&self.defaults.discipline)
    }
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            style: default_style(),
            format: default_format(),
            discipline: default_discipline(),
            color: true,
            output: OutputMode::Text,
        }
    }
}

/// Parse a report format name.
pub fn parse_format(name: &str) -> Result<OutputFormat> {
    OutputFormat::parse(name).ok_or_else(|| {
        CliError::InvalidInput(format!(
            "Unknown report format '{}'. Expected paper, review, proposal, abstract or presentation",
            name
        ))
    })
}

/// Parse a discipline tag.
pub fn parse_discipline_tag(name: &str) -> Result<DisciplineTag> {
    DisciplineTag::parse(name)
        .ok_or_else(|| CliError::InvalidInput(format!("Unknown discipline '{}'", name)))
}

fn default_style() -> String {
    "apa".to_string()
}

fn default_format() -> String {
    "paper".to_string()
}

fn default_discipline() -> String {
    "general".to_string()
}

fn default_true() -> bool {
    true
}

fn default_output() -> OutputMode {
    OutputMode::Text
}

#[cfg(test)]
mod tests {
    use super::*;
    use lyceum_assembler::PreamblePolicy;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.style().unwrap(), CitationStyle::Apa);
        assert_eq!(config.format().unwrap(), OutputFormat::Paper);
        assert_eq!(config.discipline().unwrap(), DisciplineTag::General);
        assert!(config.defaults.color);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.defaults.style = "ieee".to_string();
        config.assembler.preamble_policy = PreamblePolicy::Discard;
        config.analyzer.min_score = 2;
        config.save(&path).unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.style().unwrap(), CitationStyle::Ieee);
    }

    #[test]
    fn test_partial_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "[defaults]\nformat = \"review\"\n\n[parser]\nreference_aliases = [\"Sources\"]\n",
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.format().unwrap(), OutputFormat::Review);
        assert_eq!(config.defaults.style, "apa");
        assert!(config.parser.is_reference_heading("sources"));
        assert_eq!(config.analyzer, AnalyzerConfig::default());
    }

    #[test]
    fn test_invalid_values_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        fs::write(&path, "[defaults]\nstyle = \"harvard\"\n").unwrap();
        assert!(matches!(Config::load(&path), Err(CliError::Citation(_))));

        fs::write(&path, "[analyzer]\nmax_ngram = 0\n").unwrap();
        assert!(matches!(Config::load(&path), Err(CliError::Config(_))));

        fs::write(&path, "[defaults\n").unwrap();
        assert!(matches!(Config::load(&path), Err(CliError::Toml(_))));
    }

    #[test]
    fn test_parse_helpers() {
        assert_eq!(parse_format("Presentation").unwrap(), OutputFormat::Presentation);
        assert!(parse_format("thesis").is_err());
        assert!(matches!(
            parse_discipline_tag("neuroscience").unwrap(),
            DisciplineTag::Specific(_)
        ));
        assert!(parse_discipline_tag("astrology").is_err());
    }
}
