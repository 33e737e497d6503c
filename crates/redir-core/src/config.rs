use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::redirect::{is_safe_destination, RedirectOptions};

/// Global configuration loaded from `~/.config/redir/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedirConfig {
    /// Query parameter that carries the callback value.
    pub param_name: String,
    /// Default redirect options; CLI flags are applied on top.
    #[serde(default)]
    pub options: RedirectOptions,
}

impl Default for RedirConfig {
    fn default() -> Self {
        Self {
            param_name: "callback".to_string(),
            options: RedirectOptions {
                default_path: Some("/".to_string()),
                ..Default::default()
            },
        }
    }
}

impl RedirConfig {
    /// Rejects settings that would make the fallback itself unsafe.
    pub fn validate(&self) -> Result<()> {
        if self.param_name.is_empty() {
            anyhow::bail!("param_name must not be empty");
        }
        let default_path = self.options.default_path();
        if !default_path.starts_with('/') || !is_safe_destination(default_path) {
            anyhow::bail!("default_path must be an origin-relative path: {default_path:?}");
        }
        Ok(())
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("redir")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<RedirConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = RedirConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load and validate configuration from an explicit file.
pub fn load_from(path: &Path) -> Result<RedirConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("read config: {}", path.display()))?;
    let cfg: RedirConfig = toml::from_str(&data)
        .with_context(|| format!("parse config: {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("invalid config: {}", path.display()))?;
    Ok(cfg)
}
