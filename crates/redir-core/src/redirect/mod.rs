//! Open-redirect-safe navigation to a callback carried in the query string.
//!
//! Given `?<param>=<callback>` on the current page, the resolver navigates to
//! the callback's path on the current origin, carrying the callback's own
//! query parameters along. Foreign origins, protocol-relative values and
//! script URIs never reach the navigation sink: they collapse to the default
//! path or to a harmless relative path. Malformed input is reported to a
//! [`Diagnostics`] sink and also ends at the default path, so a call always
//! navigates somewhere safe.

mod encoding;
mod error;
mod extract;
mod guard;
mod merge;
mod options;

use url::Url;

use crate::location::Location;

pub use encoding::{decode_href, percent_space_to_plus, plus_to_percent_space};
pub use error::RedirectError;
pub use extract::{extract, ResolvedTarget};
pub use guard::is_safe_destination;
pub use merge::merge_extra;
pub use options::{RedirectOptions, DEFAULT_PATH};

/// Sink for errors absorbed by [`RedirectResolver::redirect`].
pub trait Diagnostics {
    fn log_error(&self, error: &RedirectError);
}

/// Reports absorbed errors through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn log_error(&self, error: &RedirectError) {
        tracing::error!(error = %error, "redirect failed, using default path");
    }
}

impl<D: Diagnostics + ?Sized> Diagnostics for &D {
    fn log_error(&self, error: &RedirectError) {
        (**self).log_error(error)
    }
}

/// Resolves callback parameters and dispatches the resulting navigation.
#[derive(Debug, Clone, Default)]
pub struct RedirectResolver<D = TracingDiagnostics> {
    diagnostics: D,
}

impl<D: Diagnostics> RedirectResolver<D> {
    pub fn new(diagnostics: D) -> Self {
        Self { diagnostics }
    }

    /// Computes the destination for `param_name` without navigating.
    pub fn resolve<L: Location + ?Sized>(
        &self,
        location: &L,
        param_name: &str,
        options: &RedirectOptions,
    ) -> Result<String, RedirectError> {
        let default_path = options.default_path();
        let target = extract(location.href(), location.origin(), param_name, default_path)?;

        let resolved = ResolvedTarget {
            path: options.plus_policy().apply(&target.path),
            ..target
        };
        let mut value = resolved.path_and_search();

        if let Some(extra) = options.extra_query_params.as_deref() {
            let origin = Url::parse(location.origin()).map_err(|source| {
                RedirectError::InvalidOrigin {
                    origin: location.origin().to_string(),
                    source,
                }
            })?;
            value = merge_extra(&value, extra, &origin)?;
        }

        if !resolved.hash.is_empty() && !options.erase_hash {
            value.push_str(&resolved.hash);
        }

        if !is_safe_destination(&value) {
            tracing::warn!(param = param_name, "unsafe destination replaced by default path");
            return Ok(default_path.to_string());
        }

        tracing::debug!(param = param_name, destination = %value, "redirect resolved");
        Ok(value)
    }

    /// Navigates to the destination for `param_name`.
    ///
    /// Never fails: any error is passed to the diagnostics sink once and the
    /// location is assigned the default path instead.
    pub fn redirect<L: Location + ?Sized>(
        &self,
        location: &mut L,
        param_name: &str,
        options: &RedirectOptions,
    ) {
        match self.resolve(location, param_name, options) {
            Ok(value) if options.replace => location.replace(&value),
            Ok(value) => location.assign(&value),
            Err(err) => {
                self.diagnostics.log_error(&err);
                location.assign(options.default_path());
            }
        }
    }
}

/// [`RedirectResolver::redirect`] with [`TracingDiagnostics`].
pub fn redirect<L: Location + ?Sized>(location: &mut L, param_name: &str, options: &RedirectOptions) {
    RedirectResolver::new(TracingDiagnostics).redirect(location, param_name, options)
}
