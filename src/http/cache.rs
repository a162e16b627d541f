//! HTTP cache control module
//!
//! Development responses must never be cached, so every response gets the
//! no-cache headers appended. `Last-Modified`/`If-Modified-Since` are still
//! honoured for clients that revalidate anyway.

use chrono::{DateTime, Utc};
use hyper::header::{HeaderValue, CACHE_CONTROL, EXPIRES};
use hyper::Response;
use std::time::SystemTime;

pub const NO_CACHE: &str = "no-store, no-cache, must-revalidate";
pub const EXPIRES_NOW: &str = "0";

const HTTP_DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// Append the development no-cache headers, replacing any cache headers set earlier
pub fn apply_no_cache_headers<B>(response: &mut Response<B>) {
    let headers = response.headers_mut();
    headers.insert(CACHE_CONTROL, HeaderValue::from_static(NO_CACHE));
    headers.insert(EXPIRES, HeaderValue::from_static(EXPIRES_NOW));
}

/// Format a timestamp as an IMF-fixdate, e.g. `Sun, 06 Nov 1994 08:49:37 GMT`
pub fn format_http_date(time: SystemTime) -> String {
    DateTime::<Utc>::from(time).format(HTTP_DATE_FORMAT).to_string()
}

/// Parse an HTTP date header value
pub fn parse_http_date(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc2822(value.trim())
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Check whether the client's `If-Modified-Since` covers the file's mtime
///
/// Comparison is at one-second resolution, the precision of HTTP dates.
/// Unparseable header values are ignored.
pub fn check_not_modified(if_modified_since: Option<&str>, modified: SystemTime) -> bool {
    let Some(since) = if_modified_since.and_then(parse_http_date) else {
        return false;
    };
    DateTime::<Utc>::from(modified).timestamp() <= since.timestamp()
}
