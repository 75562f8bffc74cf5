//! Project detail panel and image lightbox.
//!
//! ```text
//! closed --open_detail(p)--> detail(p)
//! detail(p) --close / overlay / Escape--> closed
//! detail(p) --open_lightbox(i)--> lightbox(p, i)
//! lightbox(p, i) --step--> lightbox(p, i +/- 1 mod n)
//! lightbox(p, i) --close / overlay / Escape--> detail(p)
//! ```
//!
//! Both open states carry a scroll-lock guard, so whatever path leaves them
//! (close, replacement by another project, teardown) unlocks the page.

use std::mem;

use folio_content::ContentStore;
use serde::Serialize;

use crate::scroll_lock::{ScrollLock, ScrollLockGuard};

/// Direction of one lightbox step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Next,
    Prev,
}

/// Read-only snapshot of the modal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ModalView<'a> {
    Closed,
    Detail { project: &'a str, selected_image: usize },
    Lightbox { project: &'a str, index: usize },
}

#[derive(Debug)]
enum State {
    Closed,
    Detail {
        project: String,
        selected: usize,
        image_count: usize,
        lock: ScrollLockGuard,
    },
    Lightbox {
        project: String,
        index: usize,
        image_count: usize,
        lock: ScrollLockGuard,
    },
}

/// Controller for the detail panel and the lightbox on top of it.
#[derive(Debug)]
pub struct ModalController {
    state: State,
    lock: ScrollLock,
}

impl ModalController {
    pub fn new(lock: ScrollLock) -> Self {
        Self {
            state: State::Closed,
            lock,
        }
    }

    /// Open the detail panel for `project`, replacing whatever is open.
    /// Unknown ids and the project already on screen (panel or lightbox)
    /// are ignored. Returns `true` if the state changed.
    pub fn open_detail(&mut self, project: &str, content: &ContentStore) -> bool {
        let Some(record) = content.project(project) else {
            log::warn!("open_detail: unknown project '{project}'");
            return false;
        };
        if self.open_project() == Some(project) {
            return false;
        }
        // Reuse the current hold when switching projects.
        let lock = match mem::replace(&mut self.state, State::Closed) {
            State::Detail { lock, .. } | State::Lightbox { lock, .. } => lock,
            State::Closed => self.lock.acquire(),
        };
        log::debug!("Detail panel opened for '{project}'");
        self.state = State::Detail {
            project: project.to_string(),
            selected: 0,
            image_count: record.image_count(),
            lock,
        };
        true
    }

    /// Card expand button: closes the panel if `project` is the one open,
    /// otherwise opens it.
    pub fn toggle_detail(&mut self, project: &str, content: &ContentStore) -> bool {
        if self.open_project() == Some(project) {
            self.close_all()
        } else {
            self.open_detail(project, content)
        }
    }

    /// Close the detail panel. Only acts when the panel is the top layer.
    pub fn close_detail(&mut self) -> bool {
        if !matches!(self.state, State::Detail { .. }) {
            return false;
        }
        self.state = State::Closed;
        log::debug!("Detail panel closed");
        true
    }

    /// Close everything regardless of layer.
    pub fn close_all(&mut self) -> bool {
        if matches!(self.state, State::Closed) {
            return false;
        }
        self.state = State::Closed;
        true
    }

    /// Close the innermost open layer (Escape, overlay click).
    pub fn dismiss(&mut self) -> bool {
        match self.state {
            State::Closed => false,
            State::Detail { .. } => self.close_detail(),
            State::Lightbox { .. } => self.close_lightbox(),
        }
    }

    /// Move the gallery selection inside the detail panel.
    pub fn select_image(&mut self, index: usize) -> bool {
        match &mut self.state {
            State::Detail {
                selected,
                image_count,
                ..
            } if index < *image_count => {
                *selected = index;
                true
            },
            _ => false,
        }
    }

    /// Open the lightbox on gallery image `index` of the open project.
    pub fn open_lightbox(&mut self, index: usize) -> bool {
        match mem::replace(&mut self.state, State::Closed) {
            State::Detail {
                project,
                image_count,
                lock,
                ..
            } if index < image_count => {
                log::debug!("Lightbox opened on '{project}' image {index}");
                self.state = State::Lightbox {
                    project,
                    index,
                    image_count,
                    lock,
                };
                true
            },
            other => {
                self.state = other;
                false
            },
        }
    }

    /// Return from the lightbox to the detail panel, keeping the image
    /// selected.
    pub fn close_lightbox(&mut self) -> bool {
        match mem::replace(&mut self.state, State::Closed) {
            State::Lightbox {
                project,
                index,
                image_count,
                lock,
            } => {
                self.state = State::Detail {
                    project,
                    selected: index,
                    image_count,
                    lock,
                };
                true
            },
            other => {
                self.state = other;
                false
            },
        }
    }

    /// Step the lightbox one image, wrapping at both ends.
    pub fn step(&mut self, step: Step) -> bool {
        let State::Lightbox {
            index, image_count, ..
        } = &mut self.state
        else {
            return false;
        };
        let n = *image_count;
        if n <= 1 {
            return false;
        }
        *index = match step {
            Step::Next => (*index + 1) % n,
            Step::Prev => (*index + n - 1) % n,
        };
        true
    }

    /// Whether next/prev affordances are shown.
    pub fn can_cycle(&self) -> bool {
        matches!(self.state, State::Lightbox { image_count, .. } if image_count > 1)
    }

    pub fn is_open(&self) -> bool {
        !matches!(self.state, State::Closed)
    }

    pub fn is_lightbox_open(&self) -> bool {
        matches!(self.state, State::Lightbox { .. })
    }

    /// Project shown in the panel or lightbox.
    pub fn open_project(&self) -> Option<&str> {
        match &self.state {
            State::Closed => None,
            State::Detail { project, .. } | State::Lightbox { project, .. } => {
                Some(project.as_str())
            },
        }
    }

    pub fn view(&self) -> ModalView<'_> {
        match &self.state {
            State::Closed => ModalView::Closed,
            State::Detail {
                project, selected, ..
            } => ModalView::Detail {
                project,
                selected_image: *selected,
            },
            State::Lightbox { project, index, .. } => ModalView::Lightbox {
                project,
                index: *index,
            },
        }
    }
}
