//! Final check on an assembled destination before it reaches the navigation sink.

/// Returns true if `value` can only navigate within the current origin.
///
/// Browsers ignore leading C0 controls and spaces and treat `\` like `/` in
/// special URLs, so the check does the same before looking for a
/// protocol-relative prefix. Anything carrying its own scheme is unsafe.
pub fn is_safe_destination(value: &str) -> bool {
    let trimmed = value.trim_start_matches(|c: char| c.is_ascii_control() || c == ' ');

    let mut lead = trimmed.chars().take(2).map(|c| if c == '\\' { '/' } else { c });
    if lead.next() == Some('/') && lead.next() == Some('/') {
        return false;
    }

    url::Url::parse(trimmed).is_err()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_relative_paths_are_safe() {
        assert!(is_safe_destination("/"));
        assert!(is_safe_destination("/account?tab=billing"));
        assert!(is_safe_destination("/x?a=1#frag"));
    }

    #[test]
    fn neutralised_payloads_are_safe() {
        assert!(is_safe_destination("alert('hey')"));
        assert!(is_safe_destination("user@example.com"));
    }

    #[test]
    fn protocol_relative_is_unsafe() {
        assert!(!is_safe_destination("//evil.example"));
        assert!(!is_safe_destination("/\\evil.example"));
        assert!(!is_safe_destination("\\\\evil.example"));
        assert!(!is_safe_destination("\\/evil.example"));
        assert!(!is_safe_destination(" \t//evil.example"));
    }

    #[test]
    fn schemes_are_unsafe() {
        assert!(!is_safe_destination("javascript:alert(1)"));
        assert!(!is_safe_destination("JavaScript:alert(1)"));
        assert!(!is_safe_destination("https://evil.example/"));
        assert!(!is_safe_destination("data:text/html,hi"));
        assert!(!is_safe_destination("\u{1}javascript:alert(1)"));
    }
}
