//! Foundation types for Folio.
//!
//! This crate contains the types shared by every Folio crate: the typed
//! input events a host feeds in, the effects the core hands back, and the
//! error type used at load time.

pub mod effect;
pub mod error;
pub mod input;

pub use effect::{HostEffect, Theme};
pub use error::{FolioError, Result};
pub use input::{InputEvent, Key, LinkKind, Target};
