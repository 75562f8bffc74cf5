//! Event scripts replayed by the driver.

use std::path::Path;

use serde::Deserialize;

use folio_types::{FolioError, InputEvent, Result};

/// A recorded session: host facts plus the events to replay.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Script {
    /// What `prefers-color-scheme` reports on the simulated host.
    #[serde(default)]
    pub system_prefers_dark: bool,
    pub events: Vec<InputEvent>,
}

impl Script {
    pub fn from_toml(src: &str) -> Result<Self> {
        let script: Self = toml::from_str(src).map_err(|e| FolioError::Script(e.to_string()))?;
        if script.events.is_empty() {
            return Err(FolioError::Script("script has no events".into()));
        }
        Ok(script)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let src = std::fs::read_to_string(path)?;
        Self::from_toml(&src).map_err(|e| match e {
            FolioError::Script(msg) => FolioError::Script(format!("{}: {msg}", path.display())),
            other => other,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_types::Target;

    #[test]
    fn parses_tagged_events() {
        let script = Script::from_toml(
            r#"
            system_prefers_dark = true

            [[events]]
            type = "scroll"
            y = 120

            [[events]]
            type = "click"
            target = { kind = "view_details", project = "portfolio" }

            [[events]]
            type = "touch_cancel"
            "#,
        )
        .unwrap();
        assert!(script.system_prefers_dark);
        assert_eq!(script.events.len(), 3);
        assert_eq!(script.events[0], InputEvent::Scroll { y: 120 });
        assert_eq!(
            script.events[1],
            InputEvent::Click {
                target: Target::ViewDetails {
                    project: "portfolio".into()
                }
            }
        );
    }

    #[test]
    fn empty_script_rejected() {
        let err = Script::from_toml("events = []").unwrap_err();
        assert!(matches!(err, FolioError::Script(_)));
    }

    #[test]
    fn unknown_event_rejected() {
        let err = Script::from_toml(
            r#"
            [[events]]
            type = "hover"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, FolioError::Script(_)));
    }

    #[test]
    fn from_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "events = []").unwrap();
        let err = Script::from_file(&path).unwrap_err();
        assert!(err.to_string().contains("bad.toml"));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = Script::from_file(Path::new("/nonexistent/script.toml")).unwrap_err();
        assert!(matches!(err, FolioError::Io(_)));
    }
}
