//! CLI command handlers. Each returns the text to print.

mod config;
mod extract;
mod merge;
mod resolve;

use anyhow::{Context, Result};
use redir_core::redirect::is_safe_destination;
use redir_core::StaticLocation;

use super::PageArgs;

pub use config::run_config;
pub use extract::run_extract;
pub use merge::run_merge;
pub use resolve::run_resolve;

/// Builds the simulated page for `page`, deriving the origin from the href if not given.
fn page_location(page: &PageArgs) -> Result<StaticLocation> {
    match &page.origin {
        Some(origin) => Ok(StaticLocation::with_origin(&page.href, origin)),
        None => StaticLocation::new(&page.href)
            .with_context(|| format!("cannot derive origin from {:?}; pass --origin", page.href)),
    }
}

/// `--default-path`, rejected unless it is a safe origin-relative path.
fn checked_default_path(page: &PageArgs) -> Result<Option<&str>> {
    match page.default_path.as_deref() {
        Some(path) if !path.starts_with('/') || !is_safe_destination(path) => {
            anyhow::bail!("--default-path must be an origin-relative path: {path:?}")
        }
        other => Ok(other),
    }
}
