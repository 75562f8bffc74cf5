//! Typed input events.
//!
//! The host maps every DOM listener (scroll, resize, click, key, touch) and
//! every mount/unmount notification to one of these enums. The core never
//! sees raw platform input and never queries the page for elements.

use serde::{Deserialize, Serialize};

/// A single event delivered to the dispatcher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputEvent {
    /// The page scrolled to vertical offset `y` (pixels from the top).
    Scroll { y: i32 },
    /// The viewport was resized.
    Resize { viewport_height: i32 },
    /// A section mounted; its extent is not known until measured.
    SectionMounted { id: String },
    /// A section reported its layout extent `[top, top + height)`.
    SectionMeasured { id: String, top: i32, height: i32 },
    /// A section unmounted.
    SectionUnmounted { id: String },
    /// A project card reported its layout extent.
    CardMeasured { id: String, top: i32, height: i32 },
    /// Pointer click (mouse or tap) resolved by the host to a target.
    Click { target: Target },
    /// Key press.
    Key { key: Key },
    /// First finger down.
    TouchStart { x: i32 },
    /// Finger moved.
    TouchMove { x: i32 },
    /// Finger lifted.
    TouchEnd { x: i32 },
    /// Gesture interrupted by the platform.
    TouchCancel,
}

/// What a click landed on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Target {
    /// A menu link, the brand logo, or a call-to-action button.
    NavLink { section: String },
    /// The mobile menu (hamburger) button.
    Hamburger,
    /// The dark/light toggle.
    ThemeToggle,
    /// Anywhere outside the open mobile menu.
    Outside,
    /// "View details" on a project card.
    ViewDetails { project: String },
    /// The expand/collapse button on a project card.
    ToggleDetails { project: String },
    /// Close button of the detail panel.
    CloseDetail,
    /// The dimmed backdrop behind the detail panel or lightbox.
    Overlay,
    /// A gallery thumbnail inside the detail panel.
    GalleryImage { index: usize },
    /// A gallery selection that stays inside the detail panel.
    GallerySelect { index: usize },
    LightboxNext,
    LightboxPrev,
    CloseLightbox,
    /// A technology filter chip.
    Filter { tech: String },
    /// An outbound project link.
    ProjectLink { project: String, link: LinkKind },
    /// A contact entry.
    Contact { id: String },
    /// The CV download button.
    DownloadCv,
}

/// Which outbound link of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkKind {
    Github,
    LiveDemo,
}

/// Keys the controllers react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Key {
    Escape,
    ArrowLeft,
    ArrowRight,
    Enter,
    Space,
}
