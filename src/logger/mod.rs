//! Logger module
//!
//! All console output of the server goes through here:
//! - startup banner and shutdown line
//! - clean URL diagnostics (rewrites and misses)
//! - access log lines
//! - errors and warnings

#[cfg(test)]
pub mod capture;
mod format;
pub mod writer;

pub use format::AccessLogEntry;

use crate::config::Config;
use std::net::SocketAddr;

/// Initialize the logger with configuration
pub fn init(config: &Config) -> std::io::Result<()> {
    writer::init(
        config.logging.access_log_file.as_deref(),
        config.logging.error_log_file.as_deref(),
    )
}

fn write_info(message: &str) {
    match writer::get() {
        Some(w) => w.write_info(message),
        None => println!("{message}"),
    }
}

fn write_error(message: &str) {
    match writer::get() {
        Some(w) => w.write_error(message),
        None => eprintln!("{message}"),
    }
}

pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    write_info(&format!(
        "🚀 Development server running at http://localhost:{}",
        addr.port()
    ));
    write_info("📝 Clean URLs enabled - no .html extensions needed");
    write_info(&format!("Serving files from: {}", config.server.root.display()));
    if let Some(workers) = config.server.workers {
        write_info(&format!("Worker threads: {workers}"));
    }
    if let Some(ref path) = config.logging.access_log_file {
        write_info(&format!("Access log: {path}"));
    }
    if let Some(ref path) = config.logging.error_log_file {
        write_info(&format!("Error log: {path}"));
    }
    write_info("Press Ctrl+C to stop the server");
}

pub fn log_server_stopped() {
    write_info("\n👋 Server stopped");
}

/// Clean URL rewrite or miss, see `Resolution::diagnostic`
pub fn log_diagnostic(line: &str) {
    #[cfg(test)]
    capture::record(line);
    write_info(line);
}

pub fn log_access(entry: &AccessLogEntry, format: &str) {
    write_info(&entry.format(format));
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    write_error(&format!("[ERROR] Failed to serve connection: {err:?}"));
}

pub fn log_error(message: &str) {
    write_error(&format!("[ERROR] {message}"));
}

pub fn log_warning(message: &str) {
    write_error(&format!("[WARN] {message}"));
}
