//! Error types for Folio.
//!
//! Runtime transitions never fail: a missing section, project or image is a
//! silent no-op. Errors only arise while loading configuration, content,
//! preferences or event scripts.

use std::io;

/// Errors produced while loading or persisting Folio data.
#[derive(Debug, thiserror::Error)]
pub enum FolioError {
    #[error("config error: {0}")]
    Config(String),

    #[error("content error: {0}")]
    Content(String),

    #[error("storage error: {0}")]
    Storage(String),

    #[error("script error: {0}")]
    Script(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML write error: {0}")]
    TomlWrite(#[from] toml::ser::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, FolioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let e = FolioError::Config("header_offset must not be negative".into());
        assert_eq!(
            format!("{e}"),
            "config error: header_offset must not be negative"
        );
    }

    #[test]
    fn content_error_display() {
        let e = FolioError::Content("duplicate project id 'a'".into());
        assert_eq!(format!("{e}"), "content error: duplicate project id 'a'");
    }

    #[test]
    fn storage_error_display() {
        let e = FolioError::Storage("read-only".into());
        assert_eq!(format!("{e}"), "storage error: read-only");
    }

    #[test]
    fn script_error_display() {
        let e = FolioError::Script("no events".into());
        assert_eq!(format!("{e}"), "script error: no events");
    }

    #[test]
    fn io_error_from_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "gone");
        let e: FolioError = io_err.into();
        let msg = format!("{e}");
        assert!(msg.contains("I/O error"));
        assert!(msg.contains("gone"));
    }

    #[test]
    fn toml_error_from_conversion() {
        let toml_err = toml::from_str::<toml::Value>("this is [[[not valid toml").unwrap_err();
        let e: FolioError = toml_err.into();
        assert!(format!("{e}").contains("TOML parse error"));
    }

    #[test]
    fn json_error_from_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let e: FolioError = json_err.into();
        assert!(format!("{e}").contains("JSON error"));
    }

    #[test]
    fn result_alias_err() {
        let r: Result<i32> = Err(FolioError::Content("oops".into()));
        assert!(r.is_err());
    }
}
