//! Content loading from TOML.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use folio_types::{FolioError, Result};

use crate::record::{ContactEntry, Project, Site, SkillGroup};

/// On-disk shape of a content document.
#[derive(Debug, Deserialize)]
struct ContentFile {
    #[serde(default)]
    site: Site,
    #[serde(default)]
    projects: Vec<Project>,
    #[serde(default)]
    skills: Vec<SkillGroup>,
    #[serde(default)]
    contacts: Vec<ContactEntry>,
}

/// Read-only, ordered collection of portfolio records.
#[derive(Debug, Clone, Default)]
pub struct ContentStore {
    site: Site,
    projects: Vec<Project>,
    skills: Vec<SkillGroup>,
    contacts: Vec<ContactEntry>,
}

impl ContentStore {
    /// Parse and validate a content document.
    pub fn from_toml(src: &str) -> Result<Self> {
        let file: ContentFile =
            toml::from_str(src).map_err(|e| FolioError::Content(format!("content.toml: {e}")))?;

        check_ids("project", file.projects.iter().map(|p| p.id.as_str()))?;
        check_ids("contact", file.contacts.iter().map(|c| c.id.as_str()))?;

        for p in &file.projects {
            if p.images.is_empty() {
                log::debug!("Project '{}' has no gallery images", p.id);
            }
        }

        Ok(Self {
            site: file.site,
            projects: file.projects,
            skills: file.skills,
            contacts: file.contacts,
        })
    }

    /// Load a content document from disk.
    pub fn from_file(path: &Path) -> Result<Self> {
        let src = std::fs::read_to_string(path)?;
        let store = Self::from_toml(&src)?;
        log::info!(
            "Loaded content from {} ({} projects, {} contacts)",
            path.display(),
            store.projects.len(),
            store.contacts.len()
        );
        Ok(store)
    }

    pub fn site(&self) -> &Site {
        &self.site
    }

    /// All projects in document order.
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn skills(&self) -> &[SkillGroup] {
        &self.skills
    }

    pub fn contacts(&self) -> &[ContactEntry] {
        &self.contacts
    }

    /// Look up a project by id.
    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Look up a contact entry by id.
    pub fn contact(&self, id: &str) -> Option<&ContactEntry> {
        self.contacts.iter().find(|c| c.id == id)
    }

    /// Distinct technologies across all projects, in first-appearance order.
    pub fn technologies(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.projects
            .iter()
            .flat_map(|p| p.technologies.iter())
            .map(String::as_str)
            .filter(|t| seen.insert(*t))
            .collect()
    }
}

fn check_ids<'a>(what: &str, ids: impl Iterator<Item = &'a str>) -> Result<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if id.is_empty() {
            return Err(FolioError::Content(format!("{what} with empty id")));
        }
        if !seen.insert(id) {
            return Err(FolioError::Content(format!("duplicate {what} id '{id}'")));
        }
    }
    Ok(())
}
