//! Content records.

use serde::Deserialize;

use folio_types::LinkKind;

/// Site-wide metadata.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Site {
    /// Owner name shown in the brand logo.
    #[serde(default)]
    pub owner: String,
    /// Hero headline.
    #[serde(default)]
    pub headline: String,
    /// Path of the downloadable CV document, if any.
    #[serde(default)]
    pub cv_path: Option<String>,
}

/// A headline number on a project card.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Metric {
    pub label: String,
    pub value: String,
    #[serde(default)]
    pub description: String,
}

/// A gallery image.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ImageRef {
    /// Asset path or URL.
    pub source: String,
    #[serde(default)]
    pub caption: String,
}

/// A showcased project.
#[derive(Debug, Clone, Deserialize)]
pub struct Project {
    /// Stable unique identifier.
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    /// Technologies used, in display order. Drives the filter chips.
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub metrics: Vec<Metric>,
    #[serde(default)]
    pub achievements: Vec<String>,
    #[serde(default)]
    pub highlights: Vec<String>,
    /// Gallery images; may be empty.
    #[serde(default)]
    pub images: Vec<ImageRef>,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub live_demo: Option<String>,
}

impl Project {
    /// Number of gallery images.
    pub fn image_count(&self) -> usize {
        self.images.len()
    }

    /// The URL behind an outbound link, if the project has one.
    pub fn link(&self, kind: LinkKind) -> Option<&str> {
        let url = match kind {
            LinkKind::Github => self.github.as_deref(),
            LinkKind::LiveDemo => self.live_demo.as_deref(),
        };
        url.filter(|u| !u.is_empty())
    }

    /// Whether the project lists `tech` among its technologies.
    pub fn uses(&self, tech: &str) -> bool {
        self.technologies.iter().any(|t| t == tech)
    }
}

/// How a contact link is followed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactKind {
    /// `mailto:` link, followed in place.
    Email,
    /// `tel:` link, followed in place.
    Phone,
    /// Web link, opened in a new context.
    External,
    /// Display only.
    Info,
}

/// A contact card.
#[derive(Debug, Clone, Deserialize)]
pub struct ContactEntry {
    pub id: String,
    pub title: String,
    pub value: String,
    #[serde(default)]
    pub link: Option<String>,
    pub kind: ContactKind,
}

/// A named group of skills.
#[derive(Debug, Clone, Deserialize)]
pub struct SkillGroup {
    pub category: String,
    #[serde(default)]
    pub items: Vec<String>,
}
