//! `redir resolve <href>` – run a redirect against a recorded location.

use anyhow::{Context, Result};
use redir_core::config::RedirConfig;
use redir_core::{RedirectOptions, RedirectResolver, TracingDiagnostics};

use super::{checked_default_path, page_location};
use crate::cli::{OptionFlags, PageArgs};

/// Overlay CLI flags on the configured options.
pub(crate) fn effective_options(
    cfg: &RedirConfig,
    page: &PageArgs,
    flags: &OptionFlags,
) -> Result<RedirectOptions> {
    let mut options = cfg.options.clone();
    options.replace |= flags.replace;
    options.erase_hash |= flags.erase_hash;
    if flags.decode_plus {
        options.decode_plus = true;
        options.encode_plus = false;
    }
    if flags.encode_plus {
        options.encode_plus = true;
        options.decode_plus = false;
    }
    if let Some(extra) = &flags.extra_query_params {
        options.extra_query_params = Some(extra.clone());
    }
    if let Some(path) = checked_default_path(page)? {
        options.default_path = Some(path.to_string());
    }
    Ok(options)
}

pub fn run_resolve(cfg: &RedirConfig, page: &PageArgs, flags: &OptionFlags) -> Result<String> {
    let options = effective_options(cfg, page, flags)?;
    let param = page.param.as_deref().unwrap_or(&cfg.param_name);
    let mut location = page_location(page)?;

    RedirectResolver::new(TracingDiagnostics).redirect(&mut location, param, &options);

    let navigation = location
        .last_navigation()
        .context("resolver did not navigate")?;
    if page.json {
        Ok(serde_json::to_string(navigation)?)
    } else {
        Ok(navigation.to_string())
    }
}
