//! Diagnostic capture for tests
//!
//! Lines are recorded per thread, so `#[tokio::test]` (current-thread
//! runtime) sees only the lines its own requests produced.

use std::cell::RefCell;

thread_local! {
    static CAPTURED: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
}

pub fn record(line: &str) {
    CAPTURED.with(|lines| lines.borrow_mut().push(line.to_string()));
}

/// Drain the lines recorded on this thread
pub fn take() -> Vec<String> {
    CAPTURED.with(|lines| std::mem::take(&mut *lines.borrow_mut()))
}
