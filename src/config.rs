use std::path::Path;

use anyhow::Context;
use anyhow::Result;
use log::warn;
use serde::Deserialize;

/// Optional config file, looked up in the working directory.
pub const CONFIG_FILE: &str = "gitlite.json";

/// Programs and paths the menu handlers hand off to.
///
/// Built once at startup and never mutated. Any subset of fields may be
/// overridden by a `gitlite.json` file; everything else keeps its default.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub editor: String,
    pub browser: String,
    pub daily_notes_dir: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            editor: "micro".to_string(),
            browser: "glow".to_string(),
            daily_notes_dir: "DIARY".to_string(),
        }
    }
}

impl Config {
    /// Load config from the working directory, falling back to defaults.
    ///
    /// A missing file is the normal case. A malformed file is logged and
    /// ignored; a broken config must not keep the menu from starting.
    pub fn load() -> Self {
        let path = Path::new(CONFIG_FILE);
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(path) {
            Ok(config) => config,
            Err(err) => {
                warn!("Ignoring malformed {CONFIG_FILE}: {err:#}");
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(config)
    }
}
