//! `redir extract <href>` – show the resolved (path, search, hash) triple.

use anyhow::Result;
use redir_core::config::RedirConfig;
use redir_core::redirect::extract;
use redir_core::Location;

use super::{checked_default_path, page_location};
use crate::cli::PageArgs;

pub fn run_extract(cfg: &RedirConfig, page: &PageArgs) -> Result<String> {
    let location = page_location(page)?;
    let param = page.param.as_deref().unwrap_or(&cfg.param_name);
    let default_path =
        checked_default_path(page)?.unwrap_or_else(|| cfg.options.default_path());

    let target = extract(location.href(), location.origin(), param, default_path)?;
    if page.json {
        Ok(serde_json::to_string(&target)?)
    } else {
        Ok(format!(
            "path:   {}\nsearch: {}\nhash:   {}",
            target.path, target.search, target.hash
        ))
    }
}
