//! Host effects and the theme value.
//!
//! The core never touches the page. Every visible consequence of a
//! transition is returned to the host as a [`HostEffect`] which the host
//! applies in order. Outbound effects are fire-and-forget.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Colour scheme applied to the document root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    /// The persisted / attribute string for this theme.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// The opposite theme.
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            other => Err(format!("unknown theme '{other}'")),
        }
    }
}

/// An instruction for the host environment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum HostEffect {
    /// Scroll the page so the section anchor sits at the top.
    ScrollTo { section: String, y: i32, smooth: bool },
    /// Suppress (`true`) or restore (`false`) background page scrolling.
    SetScrollLock { locked: bool },
    /// Apply a theme to the document root.
    ApplyTheme { theme: Theme },
    /// Open a URL, in a new browsing context or in place.
    OpenUrl { url: String, new_context: bool },
    /// Trigger a file download.
    Download { path: String },
    /// The highlighted navigation entry changed.
    ActiveSectionChanged { section: String },
    /// A project card entered the viewport for the first time.
    CardRevealed { id: String },
}
