//! Percent-decoding of the incoming href and the plus/space path policies.

use percent_encoding::percent_decode_str;

use super::RedirectError;

/// Percent-decodes `href` exactly once.
///
/// Decoding is strict: a `%` that does not start a two-hex-digit escape, or a
/// decoded byte sequence that is not UTF-8, is rejected instead of being passed
/// through.
pub fn decode_href(href: &str) -> Result<String, RedirectError> {
    let bytes = href.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let well_formed = bytes.len() > i + 2
                && bytes[i + 1].is_ascii_hexdigit()
                && bytes[i + 2].is_ascii_hexdigit();
            if !well_formed {
                return Err(RedirectError::MalformedEncoding { offset: i });
            }
            i += 3;
        } else {
            i += 1;
        }
    }

    percent_decode_str(href)
        .decode_utf8()
        .map(|s| s.into_owned())
        .map_err(RedirectError::InvalidUtf8)
}

/// Rewrites every literal `%20` in `path` to `+`.
pub fn percent_space_to_plus(path: &str) -> String {
    path.replace("%20", "+")
}

/// Rewrites every literal `+` in `path` to `%20`.
pub fn plus_to_percent_space(path: &str) -> String {
    path.replace('+', "%20")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_reserved_characters() {
        assert_eq!(
            decode_href("https://app.example/?cb=http%3A%2F%2Fevil.example").unwrap(),
            "https://app.example/?cb=http://evil.example"
        );
    }

    #[test]
    fn decodes_only_once() {
        assert_eq!(decode_href("/a%252Fb").unwrap(), "/a%2Fb");
    }

    #[test]
    fn plain_href_unchanged() {
        let href = "https://app.example/login?cb=/account+settings#top";
        assert_eq!(decode_href(href).unwrap(), href);
    }

    #[test]
    fn truncated_escape_rejected() {
        assert!(matches!(
            decode_href("https://app.example/?cb=%E0%A4%A"),
            Err(RedirectError::MalformedEncoding { offset: 30 })
        ));
        assert!(matches!(
            decode_href("%"),
            Err(RedirectError::MalformedEncoding { offset: 0 })
        ));
    }

    #[test]
    fn non_hex_escape_rejected() {
        assert!(matches!(
            decode_href("/x?cb=%zz"),
            Err(RedirectError::MalformedEncoding { offset: 6 })
        ));
    }

    #[test]
    fn invalid_utf8_rejected() {
        assert!(matches!(
            decode_href("/x?cb=%FF%FE"),
            Err(RedirectError::InvalidUtf8(_))
        ));
    }

    #[test]
    fn plus_policies() {
        assert_eq!(percent_space_to_plus("/a%20b%20c"), "/a+b+c");
        assert_eq!(plus_to_percent_space("/a+b+c"), "/a%20b%20c");
        assert_eq!(percent_space_to_plus("/plain"), "/plain");
    }
}
