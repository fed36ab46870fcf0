//! # Configuration
//!
//! Stored as `config.json` in the compdoc config directory (or any directory
//! passed with `--config-dir`). Every key is optional; missing keys fall back to
//! the compiled defaults below.
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `ui.width` / `ui.height` | `480` / `780` | Panel size requested when the UI opens |
//! | `dispatch_on_startup` | `true` | Send one metadata message right after init |
//! | `clipboard` | `true` | Offer the system clipboard to the copy-guide flow |
//! | `pretty` | `false` | Pretty-print JSON output |
//! | `log_filter` | none | Tracing filter used when `RUST_LOG` is unset |
//!
//! The library never loads this file on its own: the hosting adapter loads it
//! and hands it to `CompdocApi::init`.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            width: 480,
            height: 780,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompdocConfig {
    pub ui: UiConfig,
    pub dispatch_on_startup: bool,
    pub clipboard: bool,
    pub pretty: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_filter: Option<String>,
}

impl Default for CompdocConfig {
    fn default() -> Self {
        Self {
            ui: UiConfig::default(),
            dispatch_on_startup: true,
            clipboard: true,
            pretty: false,
            log_filter: None,
        }
    }
}

impl CompdocConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory, creating it if needed
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn path_in<P: AsRef<Path>>(config_dir: P) -> std::path::PathBuf {
        config_dir.as_ref().join(CONFIG_FILENAME)
    }
}
