//! Navigation controller: active highlight, scroll requests, mobile menu.

use serde::Serialize;

use crate::scroll::ScrollObserver;
use crate::scroll_lock::{ScrollLock, ScrollLockGuard};

/// A menu entry as the renderer sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink<'a> {
    pub section: &'a str,
    pub active: bool,
}

/// A resolved request to scroll a section into view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollRequest {
    pub section: String,
    pub y: i32,
}

/// Mobile menu state. The open state holds the page scroll lock.
#[derive(Debug)]
enum Menu {
    Closed,
    Open(ScrollLockGuard),
}

/// Navigation controller managing the menu and highlighted section.
#[derive(Debug)]
pub struct NavigationController {
    sections: Vec<String>,
    active: String,
    menu: Menu,
    lock: ScrollLock,
}

impl NavigationController {
    pub fn new(sections: &[String], default_section: &str, lock: ScrollLock) -> Self {
        Self {
            sections: sections.to_vec(),
            active: default_section.to_string(),
            menu: Menu::Closed,
            lock,
        }
    }

    /// Request a scroll to `section`. The menu is closed in every case;
    /// an unknown or unmeasured section yields no request.
    pub fn navigate_to(
        &mut self,
        section: &str,
        observer: &ScrollObserver,
    ) -> Option<ScrollRequest> {
        self.close_menu();
        let Some(y) = observer.anchor(section) else {
            log::debug!("navigate_to('{section}'): no anchor, ignoring");
            return None;
        };
        Some(ScrollRequest {
            section: section.to_string(),
            y,
        })
    }

    /// Flip the mobile menu.
    pub fn toggle_menu(&mut self) {
        self.menu = match self.menu {
            Menu::Closed => Menu::Open(self.lock.acquire()),
            Menu::Open(_) => Menu::Closed,
        };
        let state = if self.is_menu_open() { "opened" } else { "closed" };
        log::debug!("Mobile menu {state}");
    }

    /// Close the mobile menu. Returns `true` if it was open.
    pub fn close_menu(&mut self) -> bool {
        let was_open = self.is_menu_open();
        self.menu = Menu::Closed;
        was_open
    }

    pub fn is_menu_open(&self) -> bool {
        matches!(self.menu, Menu::Open(_))
    }

    /// Reflect the section the scroll observer reports.
    pub fn set_active(&mut self, section: &str) {
        if self.active != section {
            self.active = section.to_string();
        }
    }

    /// Highlighted section id.
    pub fn active(&self) -> &str {
        &self.active
    }

    /// Menu entries in display order with their highlight state.
    pub fn links(&self) -> impl Iterator<Item = NavLink<'_>> {
        self.sections.iter().map(move |s| NavLink {
            section: s.as_str(),
            active: *s == self.active,
        })
    }
}
