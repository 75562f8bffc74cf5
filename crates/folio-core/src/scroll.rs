//! Scroll observer: derives the active section from the scroll offset.
//!
//! Sections register at mount, report their extent whenever layout changes
//! and deregister at teardown. Evaluation is a single pass over the
//! registered sections, and a scroll event that repeats the last evaluated
//! offset with no layout change in between is skipped.

/// Vertical extent of a section, `[top, top + height)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionExtent {
    pub top: i32,
    pub height: i32,
}

impl SectionExtent {
    pub fn bottom(&self) -> i32 {
        self.top.saturating_add(self.height)
    }

    /// Half-open containment test.
    pub fn contains(&self, y: i32) -> bool {
        y >= self.top && y < self.bottom()
    }
}

#[derive(Debug, Clone)]
struct Section {
    id: String,
    /// `None` until the section has been laid out.
    extent: Option<SectionExtent>,
}

/// Tracks section extents and the currently active section.
#[derive(Debug, Clone)]
pub struct ScrollObserver {
    sections: Vec<Section>,
    header_offset: i32,
    default_section: String,
    active: String,
    /// Last reported vertical scroll offset.
    scroll_y: i32,
    /// Visible viewport height.
    viewport_height: i32,
    /// Offset of the last evaluation; `None` when layout changed since.
    evaluated_at: Option<i32>,
}

impl ScrollObserver {
    pub fn new(default_section: &str, header_offset: i32) -> Self {
        Self {
            sections: Vec::new(),
            header_offset,
            default_section: default_section.to_string(),
            active: default_section.to_string(),
            scroll_y: 0,
            viewport_height: 0,
            evaluated_at: None,
        }
    }

    /// Register a mounted section. Registration order is document order.
    /// Returns `false` if the id was already registered.
    pub fn register(&mut self, id: &str) -> bool {
        if self.index_of(id).is_some() {
            return false;
        }
        self.sections.push(Section {
            id: id.to_string(),
            extent: None,
        });
        self.evaluated_at = None;
        true
    }

    /// Record a section's measured extent, registering it if needed.
    pub fn measure(&mut self, id: &str, top: i32, height: i32) {
        let extent = SectionExtent {
            top,
            height: height.max(0),
        };
        match self.index_of(id) {
            Some(i) => self.sections[i].extent = Some(extent),
            None => {
                log::debug!("Section '{id}' measured before mount; registering");
                self.sections.push(Section {
                    id: id.to_string(),
                    extent: Some(extent),
                });
            },
        }
        self.evaluated_at = None;
    }

    /// Deregister a section. If it was active, the section now under the
    /// current offset takes over, else the default.
    pub fn unregister(&mut self, id: &str) -> bool {
        let Some(i) = self.index_of(id) else {
            return false;
        };
        self.sections.remove(i);
        self.evaluated_at = None;
        if self.active == id {
            self.active = section_at(&self.sections, self.probe())
                .map(str::to_string)
                .unwrap_or_else(|| self.default_section.clone());
            self.evaluated_at = Some(self.scroll_y);
        }
        true
    }

    /// Record a scroll offset and re-derive the active section.
    ///
    /// Returns the new active id if it changed.
    pub fn observe(&mut self, y: i32) -> Option<&str> {
        self.scroll_y = y;
        if self.evaluated_at == Some(y) {
            return None;
        }
        self.evaluate()
    }

    /// Re-derive the active section at the current offset (after layout
    /// changes). Returns the new active id if it changed.
    pub fn refresh(&mut self) -> Option<&str> {
        self.evaluate()
    }

    fn evaluate(&mut self) -> Option<&str> {
        self.evaluated_at = Some(self.scroll_y);
        let hit = section_at(&self.sections, self.probe())?;
        if hit == self.active {
            return None;
        }
        log::debug!("Active section {} -> {hit}", self.active);
        self.active = hit.to_string();
        Some(&self.active)
    }

    fn probe(&self) -> i32 {
        self.scroll_y.saturating_add(self.header_offset)
    }

    /// Currently active section id.
    pub fn active(&self) -> &str {
        &self.active
    }

    /// Top of a registered, measured section.
    pub fn anchor(&self, id: &str) -> Option<i32> {
        self.index_of(id)
            .and_then(|i| self.sections[i].extent)
            .map(|e| e.top)
    }

    /// Extent of a registered section, if measured.
    pub fn extent(&self, id: &str) -> Option<SectionExtent> {
        self.index_of(id).and_then(|i| self.sections[i].extent)
    }

    pub fn is_registered(&self, id: &str) -> bool {
        self.index_of(id).is_some()
    }

    pub fn scroll_y(&self) -> i32 {
        self.scroll_y
    }

    pub fn viewport_height(&self) -> i32 {
        self.viewport_height
    }

    /// Update viewport height (after window resize).
    pub fn set_viewport_height(&mut self, height: i32) {
        self.viewport_height = height.max(0);
        self.evaluated_at = None;
    }

    /// Registered section ids in document order.
    pub fn section_ids(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|s| s.id.as_str())
    }

    fn index_of(&self, id: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.id == id)
    }
}

/// Section whose extent contains `probe`. Later sections win on overlap,
/// matching document order.
fn section_at(sections: &[Section], probe: i32) -> Option<&str> {
    sections
        .iter()
        .rev()
        .find(|s| s.extent.is_some_and(|e| e.contains(probe)))
        .map(|s| s.id.as_str())
}
