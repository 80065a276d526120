//! Config file (`config.toml` under the XDG config dir) with CLI-overridable defaults.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::nmap::NmapParser;

/// How the URL list is written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One URL per line.
    #[default]
    Text,
    /// A single JSON array of strings.
    Json,
}

/// Global configuration loaded from `~/.config/scanseed/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanseedConfig {
    /// Comma-separated port allow-list, e.g. "80,443,8080". Empty = every port.
    pub ports: String,
    /// Render :80 for http and :443 for https explicitly.
    pub show_default_ports: bool,
    /// Output format: "text" (default) or "json".
    pub format: OutputFormat,
}

impl ScanseedConfig {
    /// Parser configured from this file's allow-list and default-port setting.
    pub fn nmap_parser(&self) -> NmapParser {
        NmapParser::new(&self.ports, self.show_default_ports)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("scanseed")?;
    Ok(xdg_dirs.get_config_home().join("config.toml"))
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ScanseedConfig> {
    load_or_init_at(&config_path()?)
}

/// Like [`load_or_init`] for an explicit path. A default file that cannot be
/// written is logged and skipped; an existing file that fails to load is an error.
pub fn load_or_init_at(path: &Path) -> Result<ScanseedConfig> {
    if !path.exists() {
        let default_cfg = ScanseedConfig::default();
        match write_default(path, &default_cfg) {
            Ok(()) => tracing::info!("created default config at {}", path.display()),
            Err(err) => tracing::warn!("using built-in defaults: {:#}", err),
        }
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: ScanseedConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}

fn write_default(path: &Path, cfg: &ScanseedConfig) -> Result<()> {
    let toml = toml::to_string_pretty(cfg)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }
    fs::write(path, toml).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}
