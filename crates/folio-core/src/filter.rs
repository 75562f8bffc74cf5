//! Technology filter over the project showcase.

use folio_content::{ContentStore, Project};

/// Label of the catch-all filter chip.
pub const ALL: &str = "All";

/// Current filter selection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TechFilter {
    #[default]
    All,
    Technology(String),
}

impl TechFilter {
    /// Apply a chip click. `"All"` clears the filter; a technology some
    /// project uses selects it; anything else leaves the filter alone.
    /// Returns `true` if the selection changed.
    pub fn select(&mut self, tech: &str, content: &ContentStore) -> bool {
        let next = if tech == ALL {
            Self::All
        } else if content.projects().iter().any(|p| p.uses(tech)) {
            Self::Technology(tech.to_string())
        } else {
            log::warn!("Filter: unknown technology '{tech}'");
            return false;
        };
        if *self == next {
            return false;
        }
        log::debug!("Filter -> {}", next.label());
        *self = next;
        true
    }

    /// Chip label of the current selection.
    pub fn label(&self) -> &str {
        match self {
            Self::All => ALL,
            Self::Technology(t) => t.as_str(),
        }
    }

    pub fn matches(&self, project: &Project) -> bool {
        match self {
            Self::All => true,
            Self::Technology(t) => project.uses(t),
        }
    }

    /// Projects passing the filter, in content order.
    pub fn visible_projects<'a>(&self, content: &'a ContentStore) -> Vec<&'a Project> {
        content.projects().iter().filter(|p| self.matches(p)).collect()
    }
}

/// Chip labels: `All` followed by every distinct technology.
pub fn technologies(content: &ContentStore) -> Vec<&str> {
    std::iter::once(ALL).chain(content.technologies()).collect()
}
