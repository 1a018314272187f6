//! Render configuration.

use crate::error::ConfigError;
use serde::Deserialize;

pub use crate::htmlnode::VoidStyle;

/// Configuration for rendering inline documents.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Element wrapped around a rendered inline document.
    pub wrapper_tag: String,
    /// How void elements such as `img` are closed.
    pub void_style: VoidStyle,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            wrapper_tag: "p".to_string(),
            void_style: VoidStyle::Html,
        }
    }
}

impl RenderConfig {
    /// Load configuration from TOML. Missing keys take their defaults.
    ///
    /// ```text
    /// wrapper_tag = "div"
    /// void_style = "xhtml"
    /// ```
    pub fn from_toml(input: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(input).map_err(|e| ConfigError::Toml(e.to_string()))?;
        if config.wrapper_tag.trim().is_empty() {
            return Err(ConfigError::Toml("`wrapper_tag` must not be empty".into()));
        }
        Ok(config)
    }
}
