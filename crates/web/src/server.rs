//! Web server implementation

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};

use loginwall_common::{LoginRequest, LoginResponse, Roster, Verdict};

use crate::static_files::{self, StaticAsset};

/// Web server configuration
#[derive(Debug, Clone)]
pub struct WebServerConfig {
    /// Credential roster checked by `/api/login`.
    pub roster: Roster,

    /// Optional directory to serve the UI from instead of the embedded
    /// copy. Lets the e2e harness point the server at a scratch dir.
    pub static_dir: Option<PathBuf>,
}

impl Default for WebServerConfig {
    fn default() -> Self {
        Self {
            roster: Roster::default(),
            static_dir: None,
        }
    }
}

/// Web server state
#[derive(Clone)]
pub struct WebServer {
    state: Arc<WebServerConfig>,
}

impl WebServer {
    pub fn new(cfg: WebServerConfig) -> Self {
        Self {
            state: Arc::new(cfg),
        }
    }

    /// Create router
    pub fn router(&self) -> Router {
        Router::new()
            // Login API: the only endpoint that reads credentials, and
            // only from the request body.
            .route("/api/login", post(login_handler))
            .route("/api/health", get(health_handler))
            // SPA shell for both routes; the client-side guard decides
            // which view actually renders.
            .route("/", get(index_handler))
            .route("/welcome", get(index_handler))
            .route("/assets/*path", get(asset_handler))
            .fallback(not_found_handler)
            .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any))
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone())
    }

    /// Start the web server
    pub async fn serve(self, addr: SocketAddr) -> anyhow::Result<()> {
        info!("Loginwall starting on http://{}", addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, self.router()).await?;

        Ok(())
    }
}

impl Default for WebServer {
    fn default() -> Self {
        Self::new(WebServerConfig::default())
    }
}

/// Convenience entry point used by `main`.
pub async fn serve(addr: SocketAddr, cfg: WebServerConfig) -> anyhow::Result<()> {
    WebServer::new(cfg).serve(addr).await
}

// ============================================================================
// Handlers
// ============================================================================

async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "loginwall-web"
    }))
}

/// `POST /api/login`
///
/// Pure lookup against the roster; no state is mutated, no token is
/// issued, and repeated calls with the same input behave identically.
/// The rejection message is fixed and carries a 401 so clients can
/// tell it apart from transport problems.
async fn login_handler(
    State(state): State<Arc<WebServerConfig>>,
    Json(request): Json<LoginRequest>,
) -> Response {
    // The password is deliberately not logged.
    debug!("login attempt for user {:?}", request.user_name);

    match state.roster.validate(&request) {
        Verdict::Accepted(user) => {
            info!("login accepted for user {:?}", user.user_name);
            (StatusCode::OK, Json(LoginResponse::ok(user))).into_response()
        }
        Verdict::Rejected => {
            info!("login rejected for user {:?}", request.user_name);
            (StatusCode::UNAUTHORIZED, Json(LoginResponse::rejected())).into_response()
        }
    }
}

/// SPA shell, served for `/` and `/welcome` alike.
async fn index_handler(State(state): State<Arc<WebServerConfig>>) -> Response {
    if let Some(dir) = &state.static_dir {
        match tokio::fs::read_to_string(dir.join("index.html")).await {
            Ok(html) => return Html(html).into_response(),
            Err(e) => {
                warn!("static dir set but index.html unreadable, using embedded UI: {}", e);
            }
        }
    }
    Html(static_files::INDEX_HTML).into_response()
}

async fn asset_handler(
    State(state): State<Arc<WebServerConfig>>,
    Path(path): Path<String>,
) -> Response {
    if let Some(dir) = &state.static_dir {
        // Flat asset namespace; anything with a path separator is not ours.
        if !path.contains("..") && !path.contains('/') {
            if let Ok(content) = tokio::fs::read(dir.join(&path)).await {
                return (
                    StatusCode::OK,
                    [(header::CONTENT_TYPE, static_files::guess_content_type(&path))],
                    content,
                )
                    .into_response();
            }
        }
    }

    match static_files::lookup(&path) {
        Some(StaticAsset { content_type, body }) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, content_type)],
            body,
        )
            .into_response(),
        None => (StatusCode::NOT_FOUND, "File not found").into_response(),
    }
}

async fn not_found_handler() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({"error": "not found"})),
    )
}
