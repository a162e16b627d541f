//! Request dispatch module
//!
//! Entry point for HTTP request processing: method check, clean URL
//! resolution, static file serving, then the no-cache headers and the
//! access log line.

use crate::config::AppState;
use crate::handler::static_files;
use crate::http;
use crate::logger::{self, AccessLogEntry};
use crate::resolver;
use http_body_util::Full;
use hyper::body::{Body, Bytes};
use hyper::{Method, Request, Response, Version};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

/// Per-request information the static file responder needs
pub struct RequestContext<'a> {
    /// Raw request target, query included
    pub target: &'a str,
    pub is_head: bool,
    pub if_modified_since: Option<String>,
}

/// Main entry point for HTTP request handling
///
/// Generic over the request body: only the request head is used.
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
    remote_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let started = Instant::now();
    let target = req
        .uri()
        .path_and_query()
        .map_or_else(|| req.uri().path(), |pq| pq.as_str());

    let mut response = match *req.method() {
        Method::GET | Method::HEAD => {
            let ctx = RequestContext {
                target,
                is_head: *req.method() == Method::HEAD,
                if_modified_since: header_string(&req, "if-modified-since"),
            };
            serve_resolved(&ctx, &state).await
        }
        _ => {
            logger::log_warning(&format!("Unsupported method: {}", req.method()));
            http::build_501_response()
        }
    };

    http::apply_no_cache_headers(&mut response);

    if state.config.logging.access_log {
        let mut entry = AccessLogEntry::new(
            remote_addr.ip().to_string(),
            req.method().to_string(),
            target.to_string(),
        );
        entry.http_version = version_label(req.version()).to_string();
        entry.status = response.status().as_u16();
        entry.body_bytes = response
            .body()
            .size_hint()
            .exact()
            .and_then(|n| usize::try_from(n).ok())
            .unwrap_or(0);
        entry.referer = header_string(&req, "referer");
        entry.user_agent = header_string(&req, "user-agent");
        entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    Ok(response)
}

/// Resolve the clean URL and hand the chosen file to the responder
async fn serve_resolved(ctx: &RequestContext<'_>, state: &AppState) -> Response<Full<Bytes>> {
    let resolution = resolver::resolve(ctx.target, &state.probe);
    if let Some(line) = resolution.diagnostic() {
        logger::log_diagnostic(&line);
    }
    static_files::serve_file(ctx, &state.root, resolution.file_path()).await
}

fn header_string<B>(req: &Request<B>, name: &str) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string)
}

const fn version_label(version: Version) -> &'static str {
    match version {
        Version::HTTP_09 => "0.9",
        Version::HTTP_10 => "1.0",
        Version::HTTP_2 => "2",
        Version::HTTP_3 => "3",
        _ => "1.1",
    }
}
