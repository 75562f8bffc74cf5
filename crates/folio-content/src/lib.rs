//! Content store -- the read-only records a portfolio presents.
//!
//! Content is a single TOML document with `[site]`, `[[projects]]`,
//! `[[skills]]` and `[[contacts]]` tables. The controllers only rely on a
//! project's `id`, its `images` and its optional links; everything else is
//! carried for the renderer.

pub mod builtin;
pub mod record;
mod store;

pub use record::{ContactEntry, ContactKind, ImageRef, Metric, Project, Site, SkillGroup};
pub use store::ContentStore;
