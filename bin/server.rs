// Fund Analysts - Web Server
// REST API over the analyst registry, plus the development login gate.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use fund_analysts::{default_registry, AnalystRegistry, Credentials, DevCredentials};

/// Shared application state. The registry is built once before the first
/// request and only ever read afterwards, so plain `Arc` is enough.
#[derive(Clone)]
struct AppState {
    registry: Arc<AnalystRegistry>,
    credentials: DevCredentials,
}

/// API Response wrapper
#[derive(Serialize)]
struct ApiResponse<T> {
    success: bool,
    data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<T> ApiResponse<T> {
    fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
            error: None,
        }
    }

    fn err(data: T, message: impl Into<String>) -> Self {
        Self {
            success: false,
            data,
            error: Some(message.into()),
        }
    }
}

// ============================================================================
// API Handlers
// ============================================================================

/// GET /api/health - Health check
async fn health_check() -> impl IntoResponse {
    Json(ApiResponse::ok("OK"))
}

/// GET /api/agents - All analysts, ordered by rank
async fn get_agents(State(state): State<AppState>) -> impl IntoResponse {
    Json(ApiResponse::ok(state.registry.api_list()))
}

/// GET /api/agents/:key - One analyst by key
async fn get_agent(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> impl IntoResponse {
    match state.registry.get(&key) {
        Ok(record) => {
            let info = fund_analysts::AgentInfo::from(&record.meta);
            (StatusCode::OK, Json(ApiResponse::ok(Some(info)))).into_response()
        }
        Err(e) => {
            // Unknown key is a client error, not a registry fault
            (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::err(None::<fund_analysts::AgentInfo>, e.to_string())),
            )
                .into_response()
        }
    }
}

/// POST /login - Development login gate (placeholder, not real auth)
async fn login(
    State(state): State<AppState>,
    Json(request): Json<Credentials>,
) -> impl IntoResponse {
    match state.credentials.verify(&request) {
        Ok(ok) => (StatusCode::OK, Json(ApiResponse::ok(Some(ok)))).into_response(),
        Err(e) => {
            warn!(username = %request.username, "rejected login attempt");
            (
                StatusCode::UNAUTHORIZED,
                Json(ApiResponse::err(
                    None::<fund_analysts::LoginOk>,
                    e.to_string(),
                )),
            )
                .into_response()
        }
    }
}

// ============================================================================
// Main Server
// ============================================================================

fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/health", get(health_check))
        .route("/agents", get(get_agents))
        .route("/agents/:key", get(get_agent));

    Router::new()
        .route("/login", post(login))
        .nest("/api", api_routes)
        .with_state(state)
        .layer(CorsLayer::permissive())
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .compact()
        .init();

    println!("🌐 Fund Analysts - Web Server");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    // Build the registry up front; refuse to serve with a partial table.
    let registry = match default_registry() {
        Ok(registry) => registry,
        Err(e) => {
            eprintln!("❌ Failed to build analyst registry: {}", e);
            std::process::exit(1);
        }
    };
    println!("✓ Registry loaded: {} analysts", registry.len());

    let state = AppState {
        registry: Arc::new(registry),
        credentials: DevCredentials::from_env(),
    };

    let app = build_router(state);

    let addr = "0.0.0.0:8000";
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");
    info!(%addr, "listening");

    println!("\n🚀 Server running on http://localhost:8000");
    println!("   Agents: http://localhost:8000/api/agents");
    println!("\n   Press Ctrl+C to stop\n");

    axum::serve(listener, app)
        .await
        .expect("Failed to start server");
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use tower::util::ServiceExt;

    fn test_state() -> AppState {
        AppState {
            registry: Arc::new(default_registry().unwrap()),
            credentials: DevCredentials::default(),
        }
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_get_agents_ordered() {
        let app = build_router(test_state());
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/agents")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["success"], true);

        let agents = json["data"].as_array().unwrap();
        assert_eq!(agents.len(), 18);
        assert_eq!(agents[0]["key"], "aswath_damodaran");
        // No callable leaks through the API projection
        assert!(agents[0].get("handler").is_none());
    }

    #[tokio::test]
    async fn test_get_agent_unknown_key_is_404() {
        let app = build_router(test_state());
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/agents/nobody")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = body_json(response).await;
        assert_eq!(json["success"], false);
    }

    #[tokio::test]
    async fn test_login_accepts_dev_pair() {
        let app = build_router(test_state());
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/login")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"username":"xzp","password":"xzp"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["data"]["username"], "xzp");
        assert_eq!(json["data"]["message"], "Login successful");
    }

    #[tokio::test]
    async fn test_login_rejects_wrong_pair() {
        let app = build_router(test_state());
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/login")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"username":"xzp","password":"nope"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let json = body_json(response).await;
        assert_eq!(json["success"], false);
        assert!(json["data"].is_null());
    }
}
