//! Query-string lookup
//!
//! A query string is a list of `name=value` pairs joined by `&`, optionally
//! preceded by `?`. Lookups return the value of the first pair whose name is
//! exactly `key`. Pairs without `=` never match.

use percent_encoding::percent_decode_str;
use tracing::trace;
use url::Url;

use crate::error::UtilResult;

/// Raw value of `key` in `search`, without any decoding.
///
/// ```
/// use heron_util::get_query_string;
///
/// assert_eq!(get_query_string("?a=1&b=2", "b"), Some("2"));
/// assert_eq!(get_query_string("a=1", "c"), None);
/// ```
pub fn get_query_string<'a>(search: &'a str, key: &str) -> Option<&'a str> {
    let search = search.strip_prefix('?').unwrap_or(search);
    search
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(name, _)| *name == key)
        .map(|(_, value)| value)
}

/// Value of `key` in `search`, with `+` read as a space and percent escapes
/// decoded. Invalid UTF-8 in the escapes is replaced, not rejected.
pub fn get_query_string_decoded(search: &str, key: &str) -> Option<String> {
    let raw = get_query_string(search, key)?;
    let spaced = raw.replace('+', " ");
    Some(percent_decode_str(&spaced).decode_utf8_lossy().into_owned())
}

/// Decoded value of `key` in the query of an absolute URL
pub fn query_param(url: &str, key: &str) -> UtilResult<Option<String>> {
    let url = Url::parse(url)?;
    let value = url
        .query()
        .and_then(|query| get_query_string_decoded(query, key));
    trace!(key, found = value.is_some(), "query param lookup");
    Ok(value)
}
