//! Static file serving module
//!
//! Turns a path relative to the served root into a complete response:
//! status, content type, length, `Last-Modified` and body. Resolution has
//! already happened; a path that does not name a readable regular file
//! inside the root answers 404.

use crate::handler::router::RequestContext;
use crate::http::{self, cache, mime};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::io::ErrorKind;
use std::path::Path;
use tokio::fs;

/// Serve `relative` from `root` (root must be canonical)
pub async fn serve_file(ctx: &RequestContext<'_>, root: &Path, relative: &str) -> Response<Full<Bytes>> {
    // Directory listing is not offered, the root itself is never a file
    if relative.is_empty() {
        return http::build_404_response(ctx.is_head);
    }

    let file_path = root.join(relative);

    // File not found is common (404), no need to log at warning level
    let Ok(canonical) = fs::canonicalize(&file_path).await else {
        return http::build_404_response(ctx.is_head);
    };
    if !canonical.starts_with(root) {
        logger::log_warning(&format!(
            "Path traversal attempt blocked: {} -> {}",
            ctx.target,
            canonical.display()
        ));
        return http::build_404_response(ctx.is_head);
    }

    let metadata = match fs::metadata(&canonical).await {
        Ok(m) => m,
        Err(e) if e.kind() == ErrorKind::NotFound => return http::build_404_response(ctx.is_head),
        Err(e) => {
            logger::log_error(&format!("Failed to stat '{}': {e}", canonical.display()));
            return http::build_500_response(ctx.is_head);
        }
    };
    if !metadata.is_file() {
        return http::build_404_response(ctx.is_head);
    }

    let last_modified = metadata.modified().ok();
    if let Some(modified) = last_modified {
        if cache::check_not_modified(ctx.if_modified_since.as_deref(), modified) {
            return http::build_304_response(&cache::format_http_date(modified));
        }
    }

    let content = match fs::read(&canonical).await {
        Ok(c) => c,
        Err(e) if e.kind() == ErrorKind::NotFound => return http::build_404_response(ctx.is_head),
        Err(e) => {
            logger::log_error(&format!(
                "Failed to read file '{}': {e}",
                canonical.display()
            ));
            return http::build_500_response(ctx.is_head);
        }
    };

    let content_type = mime::content_type_for(&canonical);
    let last_modified = last_modified.map(cache::format_http_date);

    http::build_file_response(
        Bytes::from(content),
        content_type,
        last_modified.as_deref(),
        ctx.is_head,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::ScratchDir;
    use http_body_util::BodyExt;
    use hyper::StatusCode;

    fn ctx(target: &str) -> RequestContext<'_> {
        RequestContext {
            target,
            is_head: false,
            if_modified_since: None,
        }
    }

    async fn body_bytes(response: Response<Full<Bytes>>) -> Vec<u8> {
        response.into_body().collect().await.unwrap().to_bytes().to_vec()
    }

    fn site(name: &str) -> (ScratchDir, std::path::PathBuf) {
        let scratch = ScratchDir::new(name);
        scratch.write("index.html", "<h1>home</h1>");
        scratch.write("logo.png", [0x89, b'P', b'N', b'G', 0x00, 0xff]);
        scratch.mkdir("assets");
        let root = scratch.path().canonicalize().unwrap();
        (scratch, root)
    }

    #[tokio::test]
    async fn test_serves_bytes_unchanged() {
        let (_scratch, root) = site("static_bytes");
        let response = serve_file(&ctx("/logo.png"), &root, "logo.png").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()["Content-Type"], "image/png");
        assert_eq!(response.headers()["Content-Length"], "6");
        assert!(response.headers().contains_key("Last-Modified"));
        assert_eq!(body_bytes(response).await, vec![0x89, b'P', b'N', b'G', 0x00, 0xff]);
    }

    #[tokio::test]
    async fn test_missing_file_is_404() {
        let (_scratch, root) = site("static_missing");
        let response = serve_file(&ctx("/missing"), &root, "missing").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_directory_is_not_listed() {
        let (_scratch, root) = site("static_dir");
        let response = serve_file(&ctx("/assets"), &root, "assets").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = serve_file(&ctx("//"), &root, "").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_traversal_outside_root_blocked() {
        let (_scratch, root) = site("static_traversal");
        let outside = ScratchDir::new("static_traversal_outside");
        outside.write("secret.txt", "secret");
        let relative = format!(
            "../{}/secret.txt",
            outside.path().file_name().unwrap().to_str().unwrap()
        );

        let response = serve_file(&ctx("/x"), &root, &relative).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_head_has_no_body() {
        let (_scratch, root) = site("static_head");
        let mut head = ctx("/index.html");
        head.is_head = true;
        let response = serve_file(&head, &root, "index.html").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()["Content-Length"], "13");
        assert!(body_bytes(response).await.is_empty());
    }

    #[tokio::test]
    async fn test_if_modified_since_returns_304() {
        let (_scratch, root) = site("static_304");
        let response = serve_file(&ctx("/index.html"), &root, "index.html").await;
        let last_modified = response.headers()["Last-Modified"].to_str().unwrap().to_string();

        let mut conditional = ctx("/index.html");
        conditional.if_modified_since = Some(last_modified);
        let response = serve_file(&conditional, &root, "index.html").await;
        assert_eq!(response.status(), StatusCode::NOT_MODIFIED);
        assert!(body_bytes(response).await.is_empty());

        conditional.if_modified_since = Some("Thu, 01 Jan 1970 00:00:00 GMT".to_string());
        let response = serve_file(&conditional, &root, "index.html").await;
        assert_eq!(response.status(), StatusCode::OK);
    }
}
