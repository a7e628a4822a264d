//! Iterator configuration
//!
//! A [`BreakConfig`] names the boundary kind and the locale an iterator is
//! built for. It can be assembled in code through [`BreakConfigBuilder`] or,
//! with the `serde` feature, loaded from TOML:
//!
//! ```toml
//! kind = "sentence"
//! locale = "ja_JP"
//! ```

use breakiter_core::{BoundaryIterator, BreakType};
use breakiter_icu::{boundary_iterator, parse_locale};

use crate::error::{ApiError, Result};

/// Locale used when none is configured
pub const DEFAULT_LOCALE: &str = "en-US";

/// Boundary kind and locale for an iterator
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct BreakConfig {
    /// Kind of boundary to find
    pub kind: BreakType,
    /// Locale identifier, e.g. `en-US` or `ja_JP`
    pub locale: String,
}

impl Default for BreakConfig {
    fn default() -> Self {
        Self {
            kind: BreakType::default(),
            locale: DEFAULT_LOCALE.to_string(),
        }
    }
}

impl BreakConfig {
    /// Configuration for `kind` in `locale`
    pub fn new(kind: BreakType, locale: impl Into<String>) -> Self {
        Self {
            kind,
            locale: locale.into(),
        }
    }

    /// Create a builder
    pub fn builder() -> BreakConfigBuilder {
        BreakConfigBuilder::default()
    }

    /// Check that the locale identifier parses
    pub fn validate(&self) -> Result<()> {
        parse_locale(&self.locale)?;
        Ok(())
    }

    /// Parse and validate a TOML document
    #[cfg(feature = "serde")]
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file
    #[cfg(feature = "serde")]
    pub fn from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "loading break configuration");
        Self::from_toml_str(&content)
    }

    /// An unbound iterator for this configuration
    pub fn iterator(&self) -> BoundaryIterator {
        boundary_iterator(self.kind, self.locale.clone())
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct BreakConfigBuilder {
    config: BreakConfig,
}

impl BreakConfigBuilder {
    /// Set the boundary kind
    pub fn kind(mut self, kind: BreakType) -> Self {
        self.config.kind = kind;
        self
    }

    /// Set the locale identifier
    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.config.locale = locale.into();
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<BreakConfig> {
        if self.config.locale.trim().is_empty() {
            return Err(ApiError::Config("locale must not be empty".to_string()));
        }
        self.config.validate()?;
        Ok(self.config)
    }

    /// Build an unbound iterator directly
    pub fn build_iterator(self) -> Result<BoundaryIterator> {
        Ok(self.build()?.iterator())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BreakConfig::default();
        assert_eq!(config.kind, BreakType::Word);
        assert_eq!(config.locale, "en-US");
    }

    #[test]
    fn test_builder() {
        let config = BreakConfig::builder()
            .kind(BreakType::Line)
            .locale("th_TH")
            .build()
            .unwrap();
        assert_eq!(config, BreakConfig::new(BreakType::Line, "th_TH"));
    }

    #[test]
    fn test_builder_rejects_bad_locales() {
        let err = BreakConfig::builder().locale("  ").build().unwrap_err();
        assert!(matches!(err, ApiError::Config(_)));

        let err = BreakConfig::builder().locale("##").build().unwrap_err();
        assert!(matches!(err, ApiError::Break(_)));
    }
}
