//! Built-in portfolio content.
//!
//! Embedded so the controllers and the driver work without an external
//! content directory.

use folio_types::Result;

use crate::store::ContentStore;

/// The embedded content document.
pub const PORTFOLIO_TOML: &str = include_str!("../content/portfolio.toml");

/// Load the embedded portfolio.
pub fn load_builtin() -> Result<ContentStore> {
    ContentStore::from_toml(PORTFOLIO_TOML)
}
