//! ServerBuilder for fluent API to build HTTP servers

use super::handlers::AppState;
use super::router::{build_api_routes, build_health_routes};
use crate::config::ServerConfig;
use crate::core::service::RentalService;
use crate::storage::InMemoryRentalService;
use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Builder for the rentdesk HTTP server
///
/// # Example
///
/// ```ignore
/// let app = ServerBuilder::new()
///     .with_service(InMemoryRentalService::new())
///     .build()?;
/// ```
pub struct ServerBuilder {
    service: Option<Arc<dyn RentalService>>,
    custom_routes: Vec<Router>,
}

impl ServerBuilder {
    /// Create a new ServerBuilder
    pub fn new() -> Self {
        Self {
            service: None,
            custom_routes: Vec::new(),
        }
    }

    /// Builder backed by a fresh in-memory store configured from `config`
    pub fn from_config(config: &ServerConfig) -> Self {
        Self::new().with_service(
            InMemoryRentalService::new().with_invoice_amount(config.billing.invoice_amount),
        )
    }

    /// Set the rental service (required)
    pub fn with_service(mut self, service: impl RentalService + 'static) -> Self {
        self.service = Some(Arc::new(service));
        self
    }

    /// Set the rental service from a handle the caller keeps
    pub fn with_shared_service(mut self, service: Arc<dyn RentalService>) -> Self {
        self.service = Some(service);
        self
    }

    /// Add routes next to the `/api` ones
    pub fn with_custom_routes(mut self, routes: Router) -> Self {
        self.custom_routes.push(routes);
        self
    }

    /// Build the final router
    ///
    /// Every route gets request tracing and a CORS policy that admits any
    /// origin, method and header.
    pub fn build(self) -> Result<Router> {
        let service = self
            .service
            .ok_or_else(|| anyhow::anyhow!("RentalService is required. Call .with_service()"))?;

        let mut app = build_health_routes().merge(build_api_routes(AppState { service }));
        for custom_router in self.custom_routes {
            app = app.merge(custom_router);
        }

        Ok(app.layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        ))
    }

    /// Serve the application with graceful shutdown
    ///
    /// Binds to `addr` and serves until SIGTERM or Ctrl+C.
    pub async fn serve(self, addr: &str) -> Result<()> {
        let app = self.build()?;
        let listener = TcpListener::bind(addr).await?;

        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Wait for shutdown signal (SIGTERM or Ctrl+C)
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}
