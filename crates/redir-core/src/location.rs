//! Navigation capability consumed by the resolver.
//!
//! The resolver only depends on this trait and does not know whether it is
//! driving a real browser, a test double, or the CLI's recorded location.

use serde::Serialize;
use url::Url;

/// Current page address plus the two ways of leaving it.
///
/// The query string and fragment are read from [`Location::href`].
pub trait Location {
    /// Full current URL, possibly percent-encoded.
    fn href(&self) -> &str;
    /// Serialized origin (`scheme://host[:port]`) of the current page.
    fn origin(&self) -> &str;
    /// Navigate, adding a history entry.
    fn assign(&mut self, url: &str);
    /// Navigate, replacing the current history entry.
    fn replace(&mut self, url: &str);
}

/// A navigation performed through a [`Location`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", content = "url", rename_all = "lowercase")]
pub enum Navigation {
    Assign(String),
    Replace(String),
}

impl Navigation {
    pub fn url(&self) -> &str {
        match self {
            Navigation::Assign(url) | Navigation::Replace(url) => url,
        }
    }
}

impl std::fmt::Display for Navigation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Navigation::Assign(url) => write!(f, "assign {url}"),
            Navigation::Replace(url) => write!(f, "replace {url}"),
        }
    }
}

/// In-memory [`Location`] that records navigations instead of performing them.
#[derive(Debug, Clone)]
pub struct StaticLocation {
    href: String,
    origin: String,
    navigations: Vec<Navigation>,
}

impl StaticLocation {
    /// Location at `href`, with the origin taken from `href` itself.
    pub fn new(href: &str) -> Result<Self, url::ParseError> {
        let origin = Url::parse(href)?.origin().ascii_serialization();
        Ok(Self::with_origin(href, &origin))
    }

    /// Location at `href` reporting `origin` verbatim.
    pub fn with_origin(href: &str, origin: &str) -> Self {
        Self {
            href: href.to_string(),
            origin: origin.to_string(),
            navigations: Vec::new(),
        }
    }

    /// Every navigation so far, oldest first.
    pub fn navigations(&self) -> &[Navigation] {
        &self.navigations
    }

    pub fn last_navigation(&self) -> Option<&Navigation> {
        self.navigations.last()
    }
}

impl Location for StaticLocation {
    fn href(&self) -> &str {
        &self.href
    }

    fn origin(&self) -> &str {
        &self.origin
    }

    fn assign(&mut self, url: &str) {
        self.navigations.push(Navigation::Assign(url.to_string()));
    }

    fn replace(&mut self, url: &str) {
        self.navigations.push(Navigation::Replace(url.to_string()));
    }
}
