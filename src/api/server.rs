//! Listener setup and the serve loop.

use std::net::SocketAddr;

use tokio::net::TcpListener;
use tracing::{error, info};

use super::handlers::AppState;
use super::routes::create_router;
use crate::config::Config;
use crate::error::{Result, ServerError};
use crate::metrics;
use crate::utils::shutdown_signal;

/// Bind the HTTP listener, mapping failure to [`ServerError::Bind`].
pub async fn bind(addr: SocketAddr) -> Result<TcpListener> {
    TcpListener::bind(addr).await.map_err(|source| {
        error!("Failed to bind {}: {}", addr, source);
        ServerError::Bind { addr, source }
    })
}

/// Validate `config`, bind `0.0.0.0:<port>` and serve until a shutdown signal.
pub async fn serve(config: Config) -> Result<()> {
    if let Err(e) = config.validate() {
        error!("Invalid configuration: {}", e);
        return Err(ServerError::InvalidConfig(e));
    }

    metrics::init_metrics();
    if let Some(metrics_port) = config.metrics_port {
        let metrics_addr = SocketAddr::from(([0, 0, 0, 0], metrics_port));
        metrics::install_exporter(metrics_addr)?;
        info!("Metrics exporter listening on {}", metrics_addr);
    }

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = bind(addr).await?;
    let router = create_router(AppState::from_config(&config));

    info!(
        counter_start = config.counter_start,
        "Running {} server on {}", config.server_name, addr
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn bind_reports_port_in_use() {
        let held = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = held.local_addr().unwrap();

        let result = bind(addr).await;

        match result {
            Err(ServerError::Bind { addr: failed, .. }) => assert_eq!(failed, addr),
            other => panic!("expected bind error, got {:?}", other.map(|_| ())),
        }
    }

    #[tokio::test]
    async fn serve_fails_fast_when_port_is_taken() {
        let held = TcpListener::bind("0.0.0.0:0").await.unwrap();
        let port = held.local_addr().unwrap().port();
        let config = Config {
            port,
            ..Config::default()
        };

        let result = tokio::time::timeout(Duration::from_secs(5), serve(config))
            .await
            .expect("serve should return instead of running");

        assert!(matches!(result, Err(ServerError::Bind { .. })));
    }

    #[tokio::test]
    async fn serve_rejects_invalid_config_before_binding() {
        let config = Config {
            server_name: String::new(),
            ..Config::default()
        };

        let result = serve(config).await;

        assert!(matches!(result, Err(ServerError::InvalidConfig(_))));
    }
}
