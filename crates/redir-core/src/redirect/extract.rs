//! Callback extraction: pull the callback value out of the current href and
//! resolve it against the current origin.

use serde::Serialize;
use url::form_urlencoded;
use url::Url;

use super::encoding::decode_href;
use super::RedirectError;

/// Path, query and fragment of a resolved redirect target.
///
/// `search` starts with `?` and `hash` with `#` when non-empty. No part ever
/// carries a scheme or host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedTarget {
    pub path: String,
    pub search: String,
    pub hash: String,
}

impl ResolvedTarget {
    /// Target used when no usable callback value exists.
    pub fn fallback(default_path: &str) -> Self {
        Self {
            path: default_path.to_string(),
            search: String::new(),
            hash: String::new(),
        }
    }

    /// `path` followed by `search`.
    pub fn path_and_search(&self) -> String {
        format!("{}{}", self.path, self.search)
    }
}

/// Extracts the callback named `param_name` from `href`.
///
/// The callback value is resolved relative to `origin` and only its path is
/// kept. Its query parameters are moved onto the outer query string, which
/// loses `param_name` itself. Callback values pointing at another origin yield
/// [`ResolvedTarget::fallback`]; opaque payloads such as `javascript:` URIs are
/// reduced to their path text.
pub fn extract(
    href: &str,
    origin: &str,
    param_name: &str,
    default_path: &str,
) -> Result<ResolvedTarget, RedirectError> {
    let decoded = decode_href(href)?;
    let current = Url::parse(&decoded).map_err(|source| RedirectError::InvalidLocation {
        href: decoded.clone(),
        source,
    })?;

    let hash = current
        .fragment()
        .filter(|f| !f.is_empty())
        .map(|f| format!("#{f}"))
        .unwrap_or_default();

    let outer: Vec<(String, String)> = current.query_pairs().into_owned().collect();
    let callback = outer
        .iter()
        .find(|(k, _)| k == param_name)
        .map(|(_, v)| v.clone());
    let mut remaining: Vec<(String, String)> = outer
        .iter()
        .filter(|(k, _)| k != param_name)
        .cloned()
        .collect();

    let callback = match callback {
        Some(value) if !value.is_empty() => value,
        _ => {
            let search = if remaining.len() == outer.len() {
                current
                    .query()
                    .filter(|q| !q.is_empty())
                    .map(|q| format!("?{q}"))
                    .unwrap_or_default()
            } else {
                serialize_search(&remaining)
            };
            tracing::debug!(param = param_name, "no callback value, using default path");
            return Ok(ResolvedTarget {
                path: default_path.to_string(),
                search,
                hash,
            });
        }
    };

    let base = Url::parse(origin).map_err(|source| RedirectError::InvalidOrigin {
        origin: origin.to_string(),
        source,
    })?;
    let callback_url = base
        .join(&callback)
        .map_err(|source| RedirectError::InvalidCallback {
            value: callback.clone(),
            source,
        })?;

    if !callback_url.cannot_be_a_base() && callback_url.origin() != base.origin() {
        tracing::warn!(
            param = param_name,
            callback_origin = %callback_url.origin().ascii_serialization(),
            "cross-origin callback rejected"
        );
        return Ok(ResolvedTarget::fallback(default_path));
    }

    remaining.extend(
        callback_url
            .query_pairs()
            .filter(|(k, v)| !k.is_empty() && !v.is_empty() && k != param_name)
            .map(|(k, v)| (k.into_owned(), v.into_owned())),
    );

    // An empty opaque path (`javascript:`) would reload the current page.
    let path = match callback_url.path() {
        "" => default_path,
        p => p,
    };

    Ok(ResolvedTarget {
        path: path.to_string(),
        search: serialize_search(&remaining),
        hash,
    })
}

/// Serializes pairs as `application/x-www-form-urlencoded`, prefixed with `?`
/// unless empty.
pub(crate) fn serialize_search(pairs: &[(String, String)]) -> String {
    if pairs.is_empty() {
        return String::new();
    }
    let query = form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish();
    format!("?{query}")
}
