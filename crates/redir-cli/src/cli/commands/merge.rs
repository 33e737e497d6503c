//! `redir merge <base> <extra> --origin <origin>`.

use anyhow::{Context, Result};
use redir_core::redirect::merge_extra;
use url::Url;

pub fn run_merge(base: &str, extra: &str, origin: &str) -> Result<String> {
    let origin = Url::parse(origin).with_context(|| format!("invalid origin: {origin}"))?;
    Ok(merge_extra(base, extra, &origin)?)
}
