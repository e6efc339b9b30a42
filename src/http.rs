use crate::error::{GlossmapError, Result};
use crate::glossary::GlossaryStore;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// HTTP boundary for the glossary store
pub struct HttpServer {
    store: Arc<GlossaryStore>,
    allowed_origins: Vec<String>,
}

impl HttpServer {
    /// Wrap a fully loaded store. Handlers assume the store is frozen:
    /// `load` must have completed before the first request is served.
    pub fn new(store: GlossaryStore, allowed_origins: Vec<String>) -> Self {
        Self {
            store: Arc::new(store),
            allowed_origins,
        }
    }

    /// Run the HTTP server
    pub async fn run(&self, port: u16) -> Result<()> {
        let app = self.create_router();

        let addr = format!("127.0.0.1:{}", port);
        log::info!("Starting glossary HTTP server on http://{}", addr);

        let listener = tokio::net::TcpListener::bind(&addr).await.map_err(|e| {
            GlossmapError::Config(format!(
                "Failed to bind to {}: {}. Another process may be using port {}; set http_server.port in config.toml to change it.",
                addr, e, port
            ))
        })?;

        axum::serve(listener, app).await.map_err(|e| {
            GlossmapError::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                format!("HTTP server error: {}", e),
            ))
        })?;

        Ok(())
    }

    /// Create the axum router
    fn create_router(&self) -> Router {
        // Build CORS layer: restrict to the configured origins when set,
        // otherwise allow any origin.
        let cors = if self.allowed_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let origins: Vec<axum::http::HeaderValue> = self
                .allowed_origins
                .iter()
                .filter_map(|o| o.parse().ok())
                .collect();
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            .route("/health", get(handle_health))
            .route("/api/terms", get(handle_list_terms))
            .route("/api/terms/:term_id", get(handle_get_term))
            .route("/api/graph", get(handle_get_graph))
            .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()).layer(cors))
            .with_state(AppState {
                store: Arc::clone(&self.store),
            })
    }
}

/// Application state shared across handlers
#[derive(Clone)]
struct AppState {
    store: Arc<GlossaryStore>,
}

/// Handle health check endpoint
async fn handle_health() -> Response {
    (
        StatusCode::OK,
        Json(serde_json::json!({
            "status": "ok",
            "service": "glossmap",
            "version": env!("CARGO_PKG_VERSION")
        })),
    )
        .into_response()
}

/// List all core terms, sorted by title
async fn handle_list_terms(State(state): State<AppState>) -> Response {
    Json(state.store.list_terms()).into_response()
}

/// Fetch a single term; ids outside the core set are a 404
async fn handle_get_term(State(state): State<AppState>, Path(term_id): Path<String>) -> Response {
    match state.store.get_term(&term_id) {
        Some(term) => Json(term).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({ "error": "Term not found" })),
        )
            .into_response(),
    }
}

/// Return the curated core graph
async fn handle_get_graph(State(state): State<AppState>) -> Response {
    Json(state.store.get_graph()).into_response()
}
