//! Style Registry
//!
//! A read-only mapping from the semantic style names used by the components
//! to concrete CSS class strings. The registry is resolved once at
//! application startup and injected through Dioxus context; components read
//! it with [`use_styles`] and fall back to the stock classes when no host
//! application provided an override.

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ThemeError {
    #[error("unknown style name: {0}")]
    UnknownStyle(String),
}

/// Semantic style name to CSS class mapping.
///
/// Every field can be overridden individually from host configuration;
/// unspecified fields keep their stock class strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StyleRegistry {
    pub btn: String,
    pub btn_outline_secondary: String,
    pub active: String,
    pub mr2: String,
    pub mr3: String,
    pub align_bottom: String,
    pub sidebar: String,
    pub sidebar_dark: String,
    pub sidebar_backdrop: String,
    /// Marker class selecting the ligature icon font.
    pub icon_font: String,
}

impl Default for StyleRegistry {
    fn default() -> Self {
        Self {
            btn: "btn".to_string(),
            btn_outline_secondary: "btn-outline-secondary".to_string(),
            active: "active".to_string(),
            mr2: "mr-2".to_string(),
            mr3: "mr-3".to_string(),
            align_bottom: "align-bottom".to_string(),
            sidebar: "sidebar".to_string(),
            sidebar_dark: "sidebar-dark".to_string(),
            sidebar_backdrop: "sidebar-backdrop".to_string(),
            icon_font: "material-icons-outlined".to_string(),
        }
    }
}

impl StyleRegistry {
    /// Look up a class string by its semantic kebab-case name.
    pub fn resolve(&self, name: &str) -> Result<&str, ThemeError> {
        match name {
            "btn" => Ok(&self.btn),
            "btn-outline-secondary" => Ok(&self.btn_outline_secondary),
            "active" => Ok(&self.active),
            "mr-2" => Ok(&self.mr2),
            "mr-3" => Ok(&self.mr3),
            "align-bottom" => Ok(&self.align_bottom),
            "sidebar" => Ok(&self.sidebar),
            "sidebar-dark" => Ok(&self.sidebar_dark),
            "sidebar-backdrop" => Ok(&self.sidebar_backdrop),
            "icon-font" => Ok(&self.icon_font),
            other => Err(ThemeError::UnknownStyle(other.to_string())),
        }
    }
}

/// Read the registry provided by the host application, or the stock
/// mapping when none was provided.
pub fn use_styles() -> StyleRegistry {
    use_hook(|| try_consume_context::<StyleRegistry>().unwrap_or_default())
}
