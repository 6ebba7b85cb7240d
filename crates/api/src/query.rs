//! Query-string reading helpers for list endpoints.
//!
//! List parameters arrive as raw key/value pairs (`Query<Vec<(String,
//! String)>>`), mirroring a URL query where a key may legally appear more
//! than once; the first occurrence wins. Empty values are treated as
//! absent so `?sort=` falls back to the default instead of failing the
//! safelist.

use reeldex_core::validate::Validator;

/// First value recorded for `key`, with an empty value counting as absent.
fn first<'a>(params: &'a [(String, String)], key: &str) -> Option<&'a str> {
    params
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
        .filter(|v| !v.is_empty())
}

/// String value for `key`, or `default` when absent.
pub fn read_string(params: &[(String, String)], key: &str, default: &str) -> String {
    first(params, key).unwrap_or(default).to_string()
}

/// Comma-separated values for `key`; absent means no entries.
pub fn read_csv(params: &[(String, String)], key: &str) -> Vec<String> {
    match first(params, key) {
        None => Vec::new(),
        Some(raw) => raw.split(',').map(str::to_string).collect(),
    }
}

/// Integer value for `key`, or `default` when absent.
///
/// A present but non-integer value records `"must be an integer value"` on
/// `v` and returns `default`, so the caller reports it alongside any range
/// failures instead of short-circuiting.
pub fn read_int(params: &[(String, String)], key: &str, default: i64, v: &mut Validator) -> i64 {
    match first(params, key) {
        None => default,
        Some(raw) => match raw.parse() {
            Ok(n) => n,
            Err(_) => {
                v.add_error(key, "must be an integer value");
                default
            }
        },
    }
}
