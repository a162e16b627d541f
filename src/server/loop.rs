// Server loop module
// Accepts connections until a shutdown signal arrives

use std::sync::Arc;
use tokio::net::TcpListener;

use super::connection::handle_connection;
use super::signal::SignalHandler;
use crate::config::AppState;
use crate::logger;

/// Accept loop
///
/// Each accepted connection is served on its own task. Accept errors are
/// logged and the loop keeps going; there is no retry or backoff. Returns
/// once `signals` requests shutdown.
#[allow(clippy::ignored_unit_patterns)]
pub async fn start_server_loop(
    listener: TcpListener,
    state: Arc<AppState>,
    signals: Arc<SignalHandler>,
) -> std::io::Result<()> {
    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        handle_connection(stream, peer_addr, Arc::clone(&state));
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }

            _ = signals.shutdown.notified() => {
                return Ok(());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::server::listener::create_listener;
    use crate::test_support::ScratchDir;
    use std::time::Duration;

    #[tokio::test]
    async fn test_loop_stops_on_shutdown() {
        let scratch = ScratchDir::new("server_loop");
        let root = scratch.path().canonicalize().unwrap();
        let config = Config::load_from("definitely_missing_devserver_config").unwrap();
        let state = Arc::new(AppState::new(config, root));
        let listener = create_listener("127.0.0.1:0".parse().unwrap()).unwrap();
        let signals = Arc::new(SignalHandler::new());

        let running = tokio::spawn(start_server_loop(listener, state, Arc::clone(&signals)));
        signals.request_shutdown();

        let result = tokio::time::timeout(Duration::from_secs(2), running)
            .await
            .expect("loop should stop")
            .unwrap();
        assert!(result.is_ok());
    }
}
