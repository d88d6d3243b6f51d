//! Server Implementation
//!
//! HTTP 服务器启动和管理

use std::net::SocketAddr;
use std::time::Duration;

use crate::api::build_app;
use crate::core::{Config, Result, ServerError, ServerState};

/// HTTP Server
pub struct Server {
    config: Config,
    state: ServerState,
}

impl Server {
    /// Create server with existing state
    pub fn with_state(config: Config, state: ServerState) -> Self {
        Self { config, state }
    }

    pub async fn run(&self) -> Result<()> {
        let addr: SocketAddr = self
            .config
            .bind_addr()
            .parse()
            .map_err(|_| ServerError::InvalidAddress(self.config.bind_addr()))?;

        let app = build_app(self.state.clone());

        let handle = axum_server::Handle::new();

        // Handle shutdown signal
        let shutdown_handle = handle.clone();
        let grace = Duration::from_millis(self.config.shutdown_timeout_ms);
        tokio::spawn(async move {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutting down...");
            shutdown_handle.graceful_shutdown(Some(grace));
        });

        tracing::info!("🍽️  GrubDash server listening on {}", addr);

        axum_server::bind(addr)
            .handle(handle)
            .serve(app.into_make_service())
            .await?;

        tracing::info!("Server stopped");
        Ok(())
    }
}
