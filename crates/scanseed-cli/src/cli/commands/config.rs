//! `scanseed config` – show config path and effective settings.

use anyhow::Result;
use scanseed_core::config;

pub fn run_config() -> Result<()> {
    let path = config::config_path()?;
    let cfg = config::load_or_init_at(&path)?;
    println!("Config file: {}", path.display());
    print!("{}", toml::to_string_pretty(&cfg)?);
    Ok(())
}
