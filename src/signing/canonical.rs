//! Canonical request building for AWS Signature V4.
//!
//! Canonical requests are a standardized representation of HTTP requests
//! used in the signing process. This client always signs a fixed
//! `POST /` with no query string, so only path encoding and header
//! canonicalization are needed here.

use http::HeaderMap;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters that should NOT be percent-encoded in URI paths.
///
/// The RFC 3986 unreserved set plus the path separator.
const URI_PATH_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'/');

/// URI-encode a path according to AWS signature requirements.
///
/// Spaces become `%20` (never `+`); slashes are preserved.
pub fn uri_encode_path(path: &str) -> String {
    utf8_percent_encode(path, URI_PATH_SET).to_string()
}

/// Build the canonical headers string and the signed headers list.
///
/// Header names are lowercased, values trimmed with internal whitespace
/// collapsed, and entries sorted by name. The signed headers list is the
/// semicolon-joined set of names, in the same order.
///
/// Only headers that take part in the signature are included: `host`,
/// anything starting with `x-amz-`, and the `content-*` trio.
pub fn canonical_headers(headers: &HeaderMap) -> (String, String) {
    use std::collections::BTreeMap;

    let mut header_map: BTreeMap<String, Vec<String>> = BTreeMap::new();

    for (name, value) in headers {
        let name_lower = name.as_str().to_lowercase();
        if !should_sign_header(&name_lower) {
            continue;
        }

        let value_str = value.to_str().unwrap_or("");
        let trimmed = value_str.split_whitespace().collect::<Vec<_>>().join(" ");
        header_map.entry(name_lower).or_default().push(trimmed);
    }

    let canonical = header_map
        .iter()
        .map(|(name, values)| format!("{}:{}\n", name, values.join(",")))
        .collect::<String>();

    let signed = header_map
        .keys()
        .map(|name| name.as_str())
        .collect::<Vec<_>>()
        .join(";");

    (canonical, signed)
}

/// Whether a header takes part in the signature.
pub fn should_sign_header(header_name: &str) -> bool {
    let name_lower = header_name.to_lowercase();

    if name_lower == "host" || name_lower.starts_with("x-amz-") {
        return true;
    }

    name_lower == "content-type" || name_lower == "content-md5" || name_lower == "content-length"
}
