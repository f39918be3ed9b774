//! Persisted user settings, passed explicitly to the collaborators that need them.
//!
//! The rendering engine never reads this.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::foundation::error::{CardError, CardResult};

/// Default settings file name, relative to the working directory.
pub const CONFIG_FILE: &str = "config.json";

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Where finished cards are written.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_directory: Option<PathBuf>,
    /// Root of a local logo/icon pack searched by file name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_pack_directory: Option<PathBuf>,
    /// Template catalogue JSON replacing the builtin one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_catalog: Option<PathBuf>,
    /// Directory template background paths are resolved against.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assets_root: Option<PathBuf>,
}

impl AppConfig {
    /// Load settings from `path`; a missing file yields defaults.
    pub fn load(path: impl AsRef<Path>) -> CardResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file; using defaults");
            return Ok(Self::default());
        }
        let f = File::open(path)
            .map_err(|e| CardError::io(format!("open config '{}': {e}", path.display())))?;
        serde_json::from_reader(BufReader::new(f))
            .map_err(|e| CardError::serde(format!("parse config '{}': {e}", path.display())))
    }

    /// Write settings as pretty JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> CardResult<()> {
        let path = path.as_ref();
        let f = File::create(path)
            .map_err(|e| CardError::io(format!("create config '{}': {e}", path.display())))?;
        serde_json::to_writer_pretty(f, self)
            .map_err(|e| CardError::serde(format!("write config '{}': {e}", path.display())))
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
