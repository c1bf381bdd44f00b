//! ServerBuilder for fluent API to build HTTP servers

use super::entity_registry::EntityRegistry;
use crate::config::{CorsConfig, ServerConfig};
use crate::core::module::Module;
use anyhow::{Context, Result};
use axum::http::HeaderValue;
use axum::{Json, Router, routing::get};
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Builder for creating HTTP servers with auto-registered routes
///
/// # Example
///
/// ```ignore
/// let app = ServerBuilder::new()
///     .with_config(ServerConfig::default())
///     .register_module(StorefrontModule::new())
///     .build()?;
/// ```
pub struct ServerBuilder {
    config: ServerConfig,
    entity_registry: EntityRegistry,
    module_names: Vec<String>,
}

impl ServerBuilder {
    /// Create a new ServerBuilder with default configuration
    pub fn new() -> Self {
        Self {
            config: ServerConfig::default(),
            entity_registry: EntityRegistry::new(),
            module_names: Vec::new(),
        }
    }

    pub fn with_config(mut self, config: ServerConfig) -> Self {
        self.config = config;
        self
    }

    /// Register a module and all of its entity routes
    pub fn register_module(mut self, module: impl Module + 'static) -> Self {
        module.register_entities(&mut self.entity_registry);
        tracing::debug!(
            module = module.name(),
            version = module.version(),
            entities = ?module.entity_types(),
            "registered module"
        );
        self.module_names.push(module.name().to_string());
        self
    }

    /// Build the final router
    ///
    /// Merges health routes with every registered entity's routes, then wraps
    /// them in the CORS and request tracing layers.
    pub fn build(self) -> Result<Router> {
        let cors = cors_layer(&self.config.cors)?;

        let app = health_routes().merge(self.entity_registry.build_routes());

        Ok(app.layer(cors).layer(TraceLayer::new_for_http()))
    }

    /// Serve on the configured bind address with graceful shutdown
    pub async fn serve(self) -> Result<()> {
        let addr = self.config.bind_address.clone();
        let modules = self.module_names.join(", ");
        let app = self.build()?;
        let listener = TcpListener::bind(&addr)
            .await
            .with_context(|| format!("failed to bind {}", addr))?;

        tracing::info!(%addr, %modules, "Server listening");

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

fn health_routes() -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/healthz", get(health_check))
}

async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Allow-all unless specific origins are configured
fn cors_layer(config: &CorsConfig) -> Result<CorsLayer> {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if config.allows_any_origin() {
        return Ok(layer.allow_origin(Any));
    }

    let origins = config
        .allowed_origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin)
                .with_context(|| format!("invalid CORS origin '{}'", origin))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(layer.allow_origin(AllowOrigin::list(origins)))
}

/// Wait for shutdown signal (SIGTERM or Ctrl+C)
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl+C");
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
                tracing::error!(error = %e, "failed to install SIGTERM handler");
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
