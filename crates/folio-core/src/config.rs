//! Controller configuration.
//!
//! Loaded from a `folio.toml`; every field has a default so an empty file
//! (or no file) yields the stock behaviour.

use std::path::Path;

use serde::Deserialize;

use folio_types::{FolioError, Result};

/// Tunables for the presentation controllers.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FolioConfig {
    /// Section ids in document order.
    #[serde(default = "default_sections")]
    pub sections: Vec<String>,
    /// Section highlighted before any scroll observation.
    #[serde(default = "default_section")]
    pub default_section: String,
    /// Height of the fixed header, added to the scroll offset when
    /// deciding which section is active.
    #[serde(default = "default_header_offset")]
    pub header_offset: i32,
    /// Minimum horizontal travel (px) for a touch to count as a swipe.
    #[serde(default = "default_swipe_threshold")]
    pub swipe_threshold: i32,
    /// Request smooth (animated) scrolling for navigation.
    #[serde(default = "yes")]
    pub smooth_scroll: bool,
    /// Visible fraction of a card needed before it is revealed.
    #[serde(default = "default_reveal_threshold")]
    pub reveal_threshold: f32,
    /// Pixels the viewport is grown by on each side for reveal checks.
    #[serde(default = "default_reveal_margin")]
    pub reveal_root_margin: i32,
    /// Preference key the theme is stored under.
    #[serde(default = "default_theme_key")]
    pub theme_key: String,
}

fn default_sections() -> Vec<String> {
    ["home", "projects", "contact"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}
fn default_section() -> String {
    "home".to_string()
}
fn default_header_offset() -> i32 {
    100
}
fn default_swipe_threshold() -> i32 {
    50
}
fn yes() -> bool {
    true
}
fn default_reveal_threshold() -> f32 {
    0.1
}
fn default_reveal_margin() -> i32 {
    50
}
fn default_theme_key() -> String {
    "theme".to_string()
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            sections: default_sections(),
            default_section: default_section(),
            header_offset: default_header_offset(),
            swipe_threshold: default_swipe_threshold(),
            smooth_scroll: true,
            reveal_threshold: default_reveal_threshold(),
            reveal_root_margin: default_reveal_margin(),
            theme_key: default_theme_key(),
        }
    }
}

impl FolioConfig {
    /// Parse and validate a config document.
    pub fn from_toml(src: &str) -> Result<Self> {
        let cfg: Self =
            toml::from_str(src).map_err(|e| FolioError::Config(format!("folio.toml: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Load a config document from disk.
    pub fn from_file(path: &Path) -> Result<Self> {
        let src = std::fs::read_to_string(path)?;
        Self::from_toml(&src)
    }

    /// Reject values the controllers cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.sections.is_empty() {
            return Err(FolioError::Config("at least one section is required".into()));
        }
        if !self.sections.contains(&self.default_section) {
            return Err(FolioError::Config(format!(
                "default_section '{}' is not a listed section",
                self.default_section
            )));
        }
        if self.header_offset < 0 {
            return Err(FolioError::Config("header_offset must not be negative".into()));
        }
        if self.swipe_threshold <= 0 {
            return Err(FolioError::Config("swipe_threshold must be positive".into()));
        }
        if !(0.0..=1.0).contains(&self.reveal_threshold) {
            return Err(FolioError::Config(
                "reveal_threshold must be within 0.0..=1.0".into(),
            ));
        }
        if self.theme_key.is_empty() {
            return Err(FolioError::Config("theme_key must not be empty".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values_are_sensible() {
        let cfg = FolioConfig::default();
        assert_eq!(cfg.sections, ["home", "projects", "contact"]);
        assert_eq!(cfg.default_section, "home");
        assert_eq!(cfg.header_offset, 100);
        assert_eq!(cfg.swipe_threshold, 50);
        assert!(cfg.smooth_scroll);
        assert!((cfg.reveal_threshold - 0.1).abs() < f32::EPSILON);
        assert_eq!(cfg.reveal_root_margin, 50);
        assert_eq!(cfg.theme_key, "theme");
        cfg.validate().unwrap();
    }

    #[test]
    fn empty_document_yields_defaults() {
        let cfg = FolioConfig::from_toml("").unwrap();
        assert_eq!(cfg.header_offset, 100);
        assert_eq!(cfg.sections.len(), 3);
    }

    #[test]
    fn partial_override() {
        let cfg = FolioConfig::from_toml(
            r#"
            sections = ["home", "about", "projects", "contact"]
            header_offset = 64
            smooth_scroll = false
            "#,
        )
        .unwrap();
        assert_eq!(cfg.sections.len(), 4);
        assert_eq!(cfg.header_offset, 64);
        assert!(!cfg.smooth_scroll);
        assert_eq!(cfg.swipe_threshold, 50);
    }

    #[test]
    fn unknown_key_rejected() {
        let err = FolioConfig::from_toml("header_ofset = 10").unwrap_err();
        assert!(matches!(err, FolioError::Config(_)));
    }

    #[test]
    fn default_section_must_be_listed() {
        let err = FolioConfig::from_toml(
            r#"
            sections = ["a", "b"]
            "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("default_section 'home'"));
    }

    #[test]
    fn non_positive_threshold_rejected() {
        assert!(FolioConfig::from_toml("swipe_threshold = 0").is_err());
        assert!(FolioConfig::from_toml("header_offset = -1").is_err());
        assert!(FolioConfig::from_toml("reveal_threshold = 1.5").is_err());
    }
}
