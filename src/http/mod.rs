//! HTTP protocol layer module
//!
//! Response builders, MIME lookup and cache headers, independent of how a
//! request was resolved.

pub mod cache;
pub mod mime;
pub mod response;

// Re-export commonly used types
pub use cache::apply_no_cache_headers;
pub use response::{
    build_304_response, build_404_response, build_500_response, build_501_response,
    build_file_response,
};
