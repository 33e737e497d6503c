//! Error types for redirect resolution.

/// Malformed input encountered while resolving a redirect target.
///
/// Every variant degrades to the default path at the entry point; none of them
/// is surfaced to the caller of [`crate::redirect::RedirectResolver::redirect`].
#[derive(Debug, thiserror::Error)]
pub enum RedirectError {
    /// A `%` in the current href is not followed by two hex digits.
    #[error("malformed percent-encoding at byte {offset}")]
    MalformedEncoding { offset: usize },

    /// Percent-decoding the current href produced bytes that are not UTF-8.
    #[error("percent-decoded location is not valid UTF-8")]
    InvalidUtf8(#[source] std::str::Utf8Error),

    /// The (decoded) current href is not an absolute URL.
    #[error("invalid location {href:?}")]
    InvalidLocation {
        href: String,
        #[source]
        source: url::ParseError,
    },

    /// The current origin cannot serve as a base for relative resolution.
    #[error("invalid origin {origin:?}")]
    InvalidOrigin {
        origin: String,
        #[source]
        source: url::ParseError,
    },

    /// The callback value does not parse relative to the current origin.
    #[error("invalid callback value {value:?}")]
    InvalidCallback {
        value: String,
        #[source]
        source: url::ParseError,
    },

    /// The partially assembled destination cannot be re-parsed for merging.
    #[error("cannot merge query parameters into {value:?}")]
    InvalidMergeBase {
        value: String,
        #[source]
        source: url::ParseError,
    },
}
