//! Folio headless driver.
//!
//! Replays an event script through the presentation core and logs every
//! host effect, then prints the final state as JSON.
//!
//! Usage: `folio-app [SCRIPT] [CONFIG]`. The script defaults to
//! `demos/walkthrough.toml` in the workspace. The config falls back to the
//! `FOLIO_CONFIG` env var, then to defaults. `FOLIO_CONTENT` overrides the
//! built-in portfolio and `FOLIO_PREFS` sets the preference file.

mod script;

use std::path::{Path, PathBuf};

use anyhow::Result;

use folio_content::ContentStore;
use folio_content::builtin::load_builtin;
use folio_core::theme::FileStore;
use folio_core::{FolioConfig, HostEffect, Portfolio};

use script::Script;

/// The walkthrough shipped with the workspace, independent of the working
/// directory.
const DEFAULT_SCRIPT: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../demos/walkthrough.toml");

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let script_path = args.next().unwrap_or_else(|| DEFAULT_SCRIPT.to_string());

    // Resolve config from CLI arg, FOLIO_CONFIG env var, or defaults.
    let config = match args.next().or_else(|| std::env::var("FOLIO_CONFIG").ok()) {
        Some(path) => {
            log::info!("Loading config from {path}");
            FolioConfig::from_file(Path::new(&path))?
        },
        None => FolioConfig::default(),
    };

    let content = match std::env::var("FOLIO_CONTENT") {
        Ok(path) => ContentStore::from_file(Path::new(&path))?,
        Err(_) => load_builtin()?,
    };
    log::info!(
        "Content: {} ({} projects, {} skill groups, {} contacts)",
        content.site().owner,
        content.projects().len(),
        content.skills().len(),
        content.contacts().len()
    );

    let prefs = std::env::var("FOLIO_PREFS")
        .map(PathBuf::from)
        .unwrap_or_else(|_| std::env::temp_dir().join("folio-prefs.toml"));
    log::info!("Preferences: {}", prefs.display());

    let script = Script::from_file(Path::new(&script_path))?;
    log::info!("Replaying {} events from {script_path}", script.events.len());

    let mut portfolio = Portfolio::new(
        config,
        content,
        Box::new(FileStore::new(prefs)),
        script.system_prefers_dark,
    );
    report("mount", &portfolio.initial_effects())?;

    for (i, event) in script.events.into_iter().enumerate() {
        let label = format!("#{i} {}", serde_json::to_string(&event)?);
        let effects = portfolio.dispatch(event);
        report(&label, &effects)?;
        log::debug!("state: {}", serde_json::to_string(&portfolio.snapshot())?);
    }

    println!("{}", serde_json::to_string_pretty(&portfolio.snapshot())?);
    report("teardown", &portfolio.teardown())?;
    Ok(())
}

fn report(label: &str, effects: &[HostEffect]) -> Result<()> {
    if effects.is_empty() {
        log::info!("{label}");
        return Ok(());
    }
    log::info!("{label} ->");
    for effect in effects {
        log::info!("    {}", serde_json::to_string(effect)?);
    }
    Ok(())
}
