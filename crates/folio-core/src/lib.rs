//! Presentation state core for a single-page portfolio.
//!
//! Each concern is a small state container changed only through named
//! transition functions. [`dispatch::Portfolio`] ties them together: it
//! takes typed [`InputEvent`]s from the host and returns the
//! [`HostEffect`]s the host should apply.

pub mod config;
pub mod dispatch;
pub mod filter;
pub mod modal;
pub mod nav;
pub mod reveal;
pub mod scroll;
pub mod scroll_lock;
pub mod swipe;
pub mod theme;

pub use config::FolioConfig;
pub use dispatch::Portfolio;
pub use folio_types::{FolioError, HostEffect, InputEvent, Key, LinkKind, Result, Target, Theme};
