//! HTTP server with axum router and graceful shutdown.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::handlers::{get_root, post_ask, AppState};
use super::ServerError;
use crate::ai::GeminiProvider;
use crate::assistant::PromptRouter;
use crate::config::{AppConfig, ServerConfig};

/// Path of the ask endpoint.
pub const ASK_PATH: &str = "/api/ai/ask";

/// HTTP server exposing the prompt router.
#[derive(Debug)]
pub struct AskServer {
    /// Server configuration.
    config: ServerConfig,
    /// Application state shared across handlers.
    state: AppState,
}

impl AskServer {
    /// Create a new server with default configuration.
    #[must_use]
    pub fn new(router: PromptRouter) -> Self {
        Self {
            config: ServerConfig::default(),
            state: AppState::new(router),
        }
    }

    /// Build the server and its Gemini provider from application config.
    ///
    /// # Errors
    ///
    /// Returns `ServerError::Model` if the provider cannot be created, for
    /// example when the API key variable is not set.
    pub fn from_config(config: &AppConfig) -> Result<Self, ServerError> {
        let provider = GeminiProvider::from_config(&config.ai)?;
        let router =
            PromptRouter::new(Arc::new(provider)).with_retry_policy(config.retry.policy());
        Ok(Self::new(router).with_config(config.server.clone()))
    }

    /// Set the server configuration (builder pattern).
    #[must_use]
    pub fn with_config(mut self, config: ServerConfig) -> Self {
        self.config = config;
        self
    }

    /// Get the configured address as a string.
    #[must_use]
    pub fn address(&self) -> String {
        self.config.address()
    }

    /// Build the axum router with all routes and middleware.
    pub fn build_router(&self) -> Router {
        let router = Router::new()
            .route("/", get(get_root))
            .route(ASK_PATH, post(post_ask))
            .with_state(self.state.clone())
            .layer(TraceLayer::new_for_http());

        if self.config.cors_permissive {
            router.layer(CorsLayer::permissive())
        } else {
            router
        }
    }

    /// Run the server, binding to the configured address.
    ///
    /// The server runs until `cancel` is triggered, then shuts down
    /// gracefully.
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails to bind or serve.
    pub async fn run(self, cancel: CancellationToken) -> Result<(), ServerError> {
        let address = self.address();
        let app = self.build_router();

        let listener = TcpListener::bind(&address)
            .await
            .map_err(|source| ServerError::BindError {
                address: address.clone(),
                source,
            })?;

        tracing::info!(
            address = %address,
            model = self.state.router.model(),
            "Starting interview assist server"
        );

        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                cancel.cancelled().await;
                tracing::info!("Server shutting down gracefully");
            })
            .await
            .map_err(ServerError::ServeError)
    }
}
