//! Per-call redirect options and the plus/space policy they select.

use serde::{Deserialize, Serialize};

use super::encoding::{percent_space_to_plus, plus_to_percent_space};

/// Fallback destination when no options override it.
pub const DEFAULT_PATH: &str = "/";

/// Caller-supplied toggles for a single redirect (optional `[options]` section in config.toml).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RedirectOptions {
    /// Raw query string (leading `?` optional) merged into the destination.
    pub extra_query_params: Option<String>,
    /// Navigate with `replace` (no history entry) instead of `assign`.
    pub replace: bool,
    /// Drop the fragment from the destination.
    pub erase_hash: bool,
    /// Rewrite `%20` in the resolved path to `+`.
    pub decode_plus: bool,
    /// Rewrite `+` in the resolved path to `%20`. Deprecated in favour of
    /// `decode_plus`, which wins when both are set.
    pub encode_plus: bool,
    /// Destination used when there is no usable callback value.
    pub default_path: Option<String>,
}

impl RedirectOptions {
    pub fn default_path(&self) -> &str {
        self.default_path.as_deref().unwrap_or(DEFAULT_PATH)
    }

    pub(crate) fn plus_policy(&self) -> PlusPolicy {
        if self.decode_plus {
            PlusPolicy::DecodePlus
        } else if self.encode_plus {
            tracing::warn!("encode_plus is deprecated; use decode_plus");
            PlusPolicy::EncodePlus
        } else {
            PlusPolicy::Keep
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PlusPolicy {
    Keep,
    DecodePlus,
    EncodePlus,
}

impl PlusPolicy {
    pub(crate) fn apply(self, path: &str) -> String {
        match self {
            PlusPolicy::Keep => path.to_string(),
            PlusPolicy::DecodePlus => percent_space_to_plus(path),
            PlusPolicy::EncodePlus => plus_to_percent_space(path),
        }
    }
}
