use std::future::Future;

use tokio::net::TcpListener;

use crate::app::{build_router, AppState};
use crate::config::{LogFormat, ServerConfig};
use crate::error::{io_err, ServerError};

/// Start the server and block the current thread until ctrl-c.
pub fn start_blocking(config: ServerConfig) -> Result<(), ServerError> {
    init_tracing(config.log_format);
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| io_err("tokio-runtime", e))?;
    runtime.block_on(run(config, shutdown_signal()))
}

/// Bind `config.bind_addr` and serve until `shutdown` resolves.
pub async fn run<F>(config: ServerConfig, shutdown: F) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let state = AppState::from_config(&config)?;
    tracing::info!(
        activities = state.manager.store().len(),
        capacity_policy = %state.manager.policy(),
        seed = ?config.seed_path,
        static_dir = ?config.static_dir,
        "roster loaded"
    );
    let listener = TcpListener::bind(config.bind_addr)
        .await
        .map_err(|e| io_err(config.bind_addr.to_string(), e))?;
    serve(listener, state, shutdown).await
}

/// Serve on an already-bound listener. Tests bind port 0 and pass it here.
pub async fn serve<F>(listener: TcpListener, state: AppState, shutdown: F) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener
        .local_addr()
        .map_err(|e| io_err("listener local_addr", e))?;
    tracing::info!(%addr, "roster server listening");
    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| io_err(addr.to_string(), e))?;
    tracing::info!("roster server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("received ctrl-c, shutting down"),
        Err(err) => tracing::warn!(error = %err, "ctrl-c handler failed; shutting down"),
    }
}

pub fn init_tracing(format: LogFormat) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = match format {
        LogFormat::Text => fmt().with_env_filter(filter).with_target(false).try_init(),
        LogFormat::Json => fmt()
            .json()
            .with_env_filter(filter)
            .with_target(false)
            .try_init(),
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpStream;
    use tokio::sync::oneshot;

    #[tokio::test]
    async fn serve_answers_over_tcp_and_stops_on_shutdown() {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("addr");
        let state = AppState::from_config(&ServerConfig::default()).expect("state");
        let (stop_tx, stop_rx) = oneshot::channel::<()>();

        let server = tokio::spawn(serve(listener, state, async {
            let _ = stop_rx.await;
        }));

        let mut stream = TcpStream::connect(addr).await.expect("connect");
        stream
            .write_all(b"GET /activities HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n")
            .await
            .expect("write request");
        let mut response = String::new();
        stream.read_to_string(&mut response).await.expect("read response");
        assert!(response.starts_with("HTTP/1.1 200"), "got: {response}");
        assert!(response.contains("Chess Club"));

        stop_tx.send(()).expect("signal shutdown");
        let result = tokio::time::timeout(Duration::from_secs(5), server)
            .await
            .expect("server stops")
            .expect("join");
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn run_reports_missing_seed_file() {
        let config = ServerConfig {
            bind_addr: "127.0.0.1:0".parse().expect("addr"),
            seed_path: Some("/definitely/not/here.yaml".into()),
            ..ServerConfig::default()
        };
        let err = run(config, async {}).await.unwrap_err();
        assert!(matches!(
            err,
            ServerError::Roster(roster_core::RosterError::SeedNotFound { .. })
        ));
    }
}
