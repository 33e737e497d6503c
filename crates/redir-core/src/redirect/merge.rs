//! Merge caller-supplied query parameters into an origin-relative destination.

use url::form_urlencoded;
use url::Url;

use super::extract::serialize_search;
use super::RedirectError;

/// Appends every pair of `extra_params` to the query string of `base_url`.
///
/// `base_url` is resolved against `origin` so that it stays origin-relative;
/// only `path` and `?search` come back out. Duplicate keys are kept, and a
/// leading `?` on `extra_params` is ignored.
pub fn merge_extra(base_url: &str, extra_params: &str, origin: &Url) -> Result<String, RedirectError> {
    let parsed = origin
        .join(base_url)
        .map_err(|source| RedirectError::InvalidMergeBase {
            value: base_url.to_string(),
            source,
        })?;

    let extra = extra_params.strip_prefix('?').unwrap_or(extra_params);
    let pairs: Vec<(String, String)> = parsed
        .query_pairs()
        .into_owned()
        .chain(form_urlencoded::parse(extra.as_bytes()).into_owned())
        .collect();

    Ok(format!("{}{}", parsed.path(), serialize_search(&pairs)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn origin() -> Url {
        Url::parse("https://app.example").unwrap()
    }

    #[test]
    fn appends_to_bare_path() {
        assert_eq!(merge_extra("/x", "?a=1", &origin()).unwrap(), "/x?a=1");
    }

    #[test]
    fn appends_after_existing_query() {
        assert_eq!(
            merge_extra("/x?a=1", "b=2&c=3", &origin()).unwrap(),
            "/x?a=1&b=2&c=3"
        );
    }

    #[test]
    fn keeps_duplicates() {
        assert_eq!(
            merge_extra("/x?a=1", "?a=2", &origin()).unwrap(),
            "/x?a=1&a=2"
        );
    }

    #[test]
    fn empty_extra_leaves_path() {
        assert_eq!(merge_extra("/x", "", &origin()).unwrap(), "/x");
        assert_eq!(merge_extra("/x", "?", &origin()).unwrap(), "/x");
    }

    #[test]
    fn origin_never_reattached() {
        let merged = merge_extra("https://app.example/x", "a=1", &origin()).unwrap();
        assert_eq!(merged, "/x?a=1");
    }

    #[test]
    fn unparsable_base_is_error() {
        assert!(matches!(
            merge_extra("http://", "a=1", &origin()),
            Err(RedirectError::InvalidMergeBase { .. })
        ));
    }
}
