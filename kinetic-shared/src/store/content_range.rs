//! Parsing of the `Content-Range` header returned for exact-count queries
//!
//! With `Prefer: count=exact` the store reports the total after the final
//! slash, e.g. `0-9/37`, or `*/0` for an empty table. A `*` total means the
//! count was not computed.

/// Extracts the trailing total from a content-range value
///
/// Returns `None` unless the value ends in `/` followed by one or more
/// ASCII digits that fit in a `u64`.
///
/// # Example
///
/// ```
/// use kinetic_shared::store::parse_total_count;
///
/// assert_eq!(parse_total_count("0-9/37"), Some(37));
/// assert_eq!(parse_total_count("0-9/*"), None);
/// ```
pub fn parse_total_count(content_range: &str) -> Option<u64> {
    let (_, total) = content_range.rsplit_once('/')?;
    if total.is_empty() || !total.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    total.parse().ok()
}
