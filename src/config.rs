//! Configuration for the privacy filter.
//!
//! Loaded from TOML. Every field has a default, so an empty file yields the
//! standard behaviour: all built-in categories, category placeholders, broad
//! BSN detection.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::catalog::PatternCatalog;
use crate::domain::{
    BsnMatcher, Category, EmailMatcher, IbanMatcher, KeywordMatcher, PatternMatcher,
    PhoneNumberMatcher, PostcodeMatcher, RegexMatcher,
};
use crate::error::{FilterError, FilterResult};
use crate::orchestrator::FilterOrchestrator;
use crate::redaction::{
    FixedReplacementStrategy, PlaceholderStrategy, RedactionStrategy, Redactor,
    DEFAULT_REPLACEMENT_TEXT,
};
use crate::scanner::{ContentScanner, DEFAULT_MAX_SCAN_BYTES};

/// How detected spans are replaced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplacementMode {
    /// `[PRIVACY_FILTERED_<CATEGORY>]`
    #[default]
    Category,
    /// The configured `replacement_text` for every category
    Fixed,
}

/// Per-category switches for the built-in detectors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryToggles {
    #[serde(default = "enabled")]
    pub phone: bool,
    #[serde(default = "enabled")]
    pub email: bool,
    #[serde(default = "enabled")]
    pub bsn: bool,
    #[serde(default = "enabled")]
    pub postcode: bool,
    #[serde(default = "enabled")]
    pub iban: bool,
}

impl CategoryToggles {
    pub fn is_enabled(&self, category: &Category) -> bool {
        match category {
            Category::Phone => self.phone,
            Category::Email => self.email,
            Category::Bsn => self.bsn,
            Category::Postcode => self.postcode,
            Category::Iban => self.iban,
            Category::Custom(_) => true,
        }
    }
}

impl Default for CategoryToggles {
    fn default() -> Self {
        Self {
            phone: true,
            email: true,
            bsn: true,
            postcode: true,
            iban: true,
        }
    }
}

/// A configured regex detector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomPattern {
    pub name: String,
    pub pattern: String,
}

/// A configured keyword detector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomKeywords {
    pub name: String,
    pub keywords: Vec<String>,
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrivacyConfig {
    #[serde(default = "enabled")]
    pub enabled: bool,

    #[serde(default)]
    pub replacement: ReplacementMode,

    #[serde(default = "default_replacement_text")]
    pub replacement_text: String,

    #[serde(default)]
    pub bsn_checksum: bool,

    #[serde(default = "default_max_scan_bytes")]
    pub max_scan_bytes: usize,

    #[serde(default)]
    pub categories: CategoryToggles,

    #[serde(default)]
    pub custom_patterns: Vec<CustomPattern>,

    #[serde(default)]
    pub custom_keywords: Vec<CustomKeywords>,
}

fn enabled() -> bool {
    true
}

fn default_replacement_text() -> String {
    DEFAULT_REPLACEMENT_TEXT.to_string()
}

fn default_max_scan_bytes() -> usize {
    DEFAULT_MAX_SCAN_BYTES
}

impl Default for PrivacyConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            replacement: ReplacementMode::default(),
            replacement_text: default_replacement_text(),
            bsn_checksum: false,
            max_scan_bytes: default_max_scan_bytes(),
            categories: CategoryToggles::default(),
            custom_patterns: Vec::new(),
            custom_keywords: Vec::new(),
        }
    }
}

impl PrivacyConfig {
    /// Loads configuration from a TOML file.
    pub fn load(path: &Path) -> FilterResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| FilterError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> FilterResult<Self> {
        let config: Self = toml::from_str(content)?;
        if config.max_scan_bytes == 0 {
            return Err(FilterError::configuration(
                "max_scan_bytes",
                "must be greater than zero",
            ));
        }
        Ok(config)
    }

    /// Compiles the enabled built-ins followed by custom patterns and
    /// keyword lists, in that order.
    pub fn build_catalog(&self) -> FilterResult<PatternCatalog> {
        let builtins: Vec<Box<dyn PatternMatcher>> = vec![
            Box::new(PhoneNumberMatcher::new()),
            Box::new(EmailMatcher::new()),
            Box::new(BsnMatcher::new().with_checksum(self.bsn_checksum)),
            Box::new(PostcodeMatcher::new()),
            Box::new(IbanMatcher::new()),
        ];

        let mut catalog = PatternCatalog::empty();
        for matcher in builtins {
            if self.categories.is_enabled(matcher.category()) {
                catalog.register(matcher)?;
            }
        }

        for custom in &self.custom_patterns {
            check_custom_name(&custom.name)?;
            catalog.register(Box::new(RegexMatcher::new(&custom.name, &custom.pattern)?))?;
        }

        for custom in &self.custom_keywords {
            check_custom_name(&custom.name)?;
            catalog.register(Box::new(KeywordMatcher::new(&custom.name, &custom.keywords)?))?;
        }

        Ok(catalog)
    }

    pub fn build_strategy(&self) -> Box<dyn RedactionStrategy> {
        match self.replacement {
            ReplacementMode::Category => Box::new(PlaceholderStrategy::new()),
            ReplacementMode::Fixed => {
                Box::new(FixedReplacementStrategy::new(self.replacement_text.clone()))
            }
        }
    }

    pub fn build_scanner(&self) -> FilterResult<ContentScanner> {
        Ok(ContentScanner::new(self.build_catalog()?).with_max_scan_bytes(self.max_scan_bytes))
    }

    pub fn build_orchestrator(&self) -> FilterResult<FilterOrchestrator> {
        Ok(FilterOrchestrator::new(
            self.build_scanner()?,
            Redactor::new(self.build_strategy()),
        )
        .with_enabled(self.enabled))
    }
}

fn check_custom_name(name: &str) -> FilterResult<()> {
    let valid = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if !valid {
        return Err(FilterError::configuration(
            name,
            "custom category names may only contain letters, digits, '_' and '-'",
        ));
    }
    if Category::from(name).is_builtin() {
        return Err(FilterError::configuration(
            name,
            "custom category shadows a built-in category",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PrivacyConfig::default();
        assert!(config.enabled);
        assert_eq!(config.replacement, ReplacementMode::Category);
        assert_eq!(config.replacement_text, "[PRIVACY_FILTERED]");
        assert_eq!(config.build_catalog().unwrap().len(), 5);
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(PrivacyConfig::from_toml_str("").unwrap(), PrivacyConfig::default());
    }

    #[test]
    fn test_full_toml() {
        let config = PrivacyConfig::from_toml_str(
            r#"
            replacement = "fixed"
            replacement_text = "***"
            bsn_checksum = true

            [categories]
            postcode = false

            [[custom_patterns]]
            name = "case_number"
            pattern = 'ZK-\d{6}'

            [[custom_keywords]]
            name = "diagnosis"
            keywords = ["diagnose", "medicatie"]
            "#,
        )
        .unwrap();

        let catalog = config.build_catalog().unwrap();
        assert!(!catalog.contains(&Category::Postcode));
        assert!(catalog.contains(&Category::from("case_number")));
        assert!(catalog.contains(&Category::from("diagnosis")));
        assert_eq!(config.build_strategy().name(), "fixed-replacement");
    }

    #[test]
    fn test_invalid_custom_pattern_fails_fast() {
        let config = PrivacyConfig::from_toml_str(
            r#"
            [[custom_patterns]]
            name = "broken"
            pattern = "(unclosed"
            "#,
        )
        .unwrap();
        assert!(matches!(
            config.build_catalog(),
            Err(FilterError::Configuration { .. })
        ));
    }

    #[test]
    fn test_custom_name_cannot_shadow_builtin() {
        let config = PrivacyConfig {
            custom_keywords: vec![CustomKeywords {
                name: "email".to_string(),
                keywords: vec!["mail".to_string()],
            }],
            ..Default::default()
        };
        assert!(config.build_catalog().is_err());
    }

    #[test]
    fn test_zero_scan_limit_rejected() {
        assert!(PrivacyConfig::from_toml_str("max_scan_bytes = 0").is_err());
    }
}
