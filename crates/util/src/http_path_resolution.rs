use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Bytes escaped inside a single path segment or query value.
///
/// Everything except RFC3986 unreserved bytes (`A-Z`, `a-z`, `0-9`, `-`, `.`,
/// `_`, `~`) is percent-encoded, so values carrying `/`, `&`, `#`, `?` or
/// spaces cannot change the shape of the URL.
pub const COMPONENT_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'.').remove(b'_').remove(b'~');

/// Resolves an endpoint template by replacing `{key}` placeholders.
///
/// Values are percent-encoded as single path segments. Placeholders with no
/// matching variable are left untouched.
///
/// # Examples
/// ```
/// use m2a_util::resolve_path;
///
/// let path = resolve_path("/api/v2/connect/sources/{source_id}", &[("source_id", "src-42")]);
/// assert_eq!(path, "/api/v2/connect/sources/src-42");
///
/// let path = resolve_path("/api/v1/vod/assets/{asset_id}/playback", &[("asset_id", "a/b c")]);
/// assert_eq!(path, "/api/v1/vod/assets/a%2Fb%20c/playback");
/// ```
pub fn resolve_path(template: &str, variables: &[(&str, &str)]) -> String {
    let mut path = template.to_string();
    for (key, value) in variables {
        let needle = format!("{{{key}}}");
        path = path.replace(&needle, &encode_component(value));
    }
    path
}

/// Percent-encodes a path segment or query value.
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT_ENCODE_SET).to_string()
}
