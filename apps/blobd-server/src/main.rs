//! blobd server - minimal in-memory HTTP object store.
//!
//! This binary serves the blobd HTTP API on a plain TCP listener. All
//! state lives in process memory and vanishes on exit; there is no
//! persistence layer to configure.
//!
//! # Usage
//!
//! ```text
//! PORT=8080 blobd-server
//! ```
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `PORT` | `8080` | TCP port to listen on |
//! | `LOG_LEVEL` | `info` | Log level filter |
//! | `RUST_LOG` | *(unset)* | Fine-grained tracing filter (overrides `LOG_LEVEL`) |

mod config;

use std::net::SocketAddr;

use anyhow::{Context, Result};
use blobd_core::{InMemoryStorage, ObjectStorage};
use blobd_http::{HttpConfig, HttpService};
use hyper_util::rt::{TokioExecutor, TokioIo};
use hyper_util::server::conn::auto::Builder as HttpConnBuilder;
use tokio::net::TcpListener;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use crate::config::ServerConfig;

/// Server version reported in health check and documentation responses.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the tracing subscriber.
///
/// Uses `RUST_LOG` if set, otherwise falls back to the `LOG_LEVEL`
/// config value.
fn init_tracing(log_level: &str) -> Result<()> {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::try_new(log_level)
            .with_context(|| format!("invalid log level filter: {log_level}"))?
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    Ok(())
}

/// Build the [`HttpConfig`] carrying this binary's service identity.
fn build_http_config() -> HttpConfig {
    HttpConfig {
        service_name: String::from("blobd"),
        service_version: String::from(VERSION),
    }
}

/// Run the accept loop, serving connections until a shutdown signal is
/// received.
async fn serve<S: ObjectStorage>(listener: TcpListener, service: HttpService<S>) -> Result<()> {
    let graceful = hyper_util::server::graceful::GracefulShutdown::new();
    let http = HttpConnBuilder::new(TokioExecutor::new());

    let shutdown = async {
        tokio::signal::ctrl_c().await.ok();
        info!("received shutdown signal, draining connections");
    };

    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            result = listener.accept() => {
                let (stream, peer_addr) = match result {
                    Ok(conn) => conn,
                    Err(e) => {
                        warn!(error = %e, "failed to accept connection");
                        continue;
                    }
                };

                let svc = service.clone();
                let conn = http.serve_connection(TokioIo::new(stream), svc);
                let conn = graceful.watch(conn.into_owned());

                tokio::spawn(async move {
                    if let Err(e) = conn.await {
                        error!(peer_addr = %peer_addr, error = %e, "connection error");
                    }
                });
            }

            () = &mut shutdown => {
                info!("shutting down gracefully");
                break;
            }
        }
    }

    // Wait for in-flight requests to complete.
    graceful.shutdown().await;
    info!("all connections drained, exiting");

    Ok(())
}

/// Probe the health endpoint over a raw TCP connection.
///
/// Exits cleanly if the server reports healthy, used by container
/// HEALTHCHECK probes through the `--health-check` flag.
async fn run_health_check(addr: &str) -> Result<()> {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpStream;

    let stream = TcpStream::connect(addr)
        .await
        .with_context(|| format!("cannot connect to {addr}"))?;

    let (mut reader, mut writer) = stream.into_split();

    let request = format!("GET /health HTTP/1.1\r\nHost: {addr}\r\nConnection: close\r\n\r\n");
    writer.write_all(request.as_bytes()).await?;
    writer.shutdown().await?;

    let mut response = String::new();
    reader.read_to_string(&mut response).await?;

    if response.contains("200 OK") && response.contains("\"status\":\"healthy\"") {
        Ok(())
    } else {
        anyhow::bail!("unhealthy response from {addr}")
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Handle --health-check flag for Docker HEALTHCHECK.
    if std::env::args().any(|a| a == "--health-check") {
        let config = ServerConfig::from_env();
        let addr = format!("127.0.0.1:{}", config.port);
        let healthy = run_health_check(&addr).await.is_ok();
        std::process::exit(i32::from(!healthy));
    }

    let config = ServerConfig::from_env();

    init_tracing(&config.log_level)?;

    info!(port = config.port, version = VERSION, "starting blobd server");

    let store = InMemoryStorage::new();
    let service = HttpService::new(store, build_http_config());

    let addr: SocketAddr = config
        .listen_addr()
        .parse()
        .with_context(|| format!("invalid bind address: {}", config.listen_addr()))?;

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind to {addr}"))?;

    info!(%addr, "listening for connections");

    serve(listener, service).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_build_http_config_with_service_identity() {
        let http_config = build_http_config();
        assert_eq!(http_config.service_name, "blobd");
        assert_eq!(http_config.service_version, VERSION);
    }
}
