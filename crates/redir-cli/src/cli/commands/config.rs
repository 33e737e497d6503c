//! `redir config` – show where the config lives and what is in effect.

use anyhow::Result;
use redir_core::config::RedirConfig;
use std::path::Path;

pub fn run_config(cfg: &RedirConfig, path: &Path) -> Result<String> {
    let body = toml::to_string_pretty(cfg)?;
    Ok(format!("# {}\n{}", path.display(), body.trim_end()))
}
