//! Application startup and lifecycle management.

use crate::config::GatewayConfig;
use crate::services::providers::groq::GroqChatProvider;
use crate::services::ChatProvider;
use crate::{build_router, AppState};
use axum::Router;
use service_core::error::AppError;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application against the configured Groq endpoint.
    pub async fn build(config: GatewayConfig) -> Result<Self, AppError> {
        let provider: Arc<dyn ChatProvider> =
            Arc::new(GroqChatProvider::new(config.groq.clone()));

        tracing::info!(
            upstream = %config.groq.api_url,
            "Initialized Groq chat provider"
        );

        Self::build_with_provider(config, provider).await
    }

    /// Build the application around an existing provider.
    pub async fn build_with_provider(
        config: GatewayConfig,
        provider: Arc<dyn ChatProvider>,
    ) -> Result<Self, AppError> {
        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind HTTP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        // Port 0 binds a random port
        let port = listener.local_addr()?.port();

        let router = build_router(AppState { config, provider });

        Ok(Self {
            port,
            listener,
            router,
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Serve until SIGINT/SIGTERM.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        tracing::info!("Listening on port {}", self.port);

        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
