//! Axum-based HTTP gateway for the department responder. Config-driven via
//! CoreConfig.

use axum::{
    extract::{Json, State},
    routing::{get, post},
    Router,
};
use axum::http::Method;
use deptbot_core::{CoreConfig, KnowledgeBase, QueryProcessor};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Pre-flight check: config loads and the port is available.
fn run_verify() -> Result<(), String> {
    let config = CoreConfig::load().map_err(|e| format!("Config load failed: {}", e))?;

    print!("Checking guardrail keywords... ");
    if config.guardrail_keywords.is_empty() {
        return Err("guardrail keyword set is EMPTY: every query would be rejected".to_string());
    }
    println!("OK ({} keywords)", config.guardrail_keywords.len());

    let port = config.port;
    print!("Checking port {}... ", port);
    let addr = std::net::SocketAddr::from(([127, 0, 0, 1], port));
    match std::net::TcpListener::bind(addr) {
        Ok(listener) => {
            drop(listener);
            println!("OK (available)");
        }
        Err(e) => {
            return Err(format!("Port {} BLOCKED: {}", port, e));
        }
    }

    println!("\n✅ SUCCESS: All systems GO. Ready to start gateway.");
    Ok(())
}

#[tokio::main]
async fn main() {
    // Load .env file if present (before any env::var calls)
    if let Err(e) = dotenvy::dotenv() {
        eprintln!(
            "[deptbot-gateway] .env not loaded: {} (using system environment)",
            e
        );
    }

    // Handle --verify flag for pre-flight check
    let args: Vec<String> = std::env::args().collect();
    if args.iter().any(|a| a == "--verify") {
        match run_verify() {
            Ok(()) => std::process::exit(0),
            Err(e) => {
                eprintln!("❌ PRE-FLIGHT FAILED: {}", e);
                std::process::exit(1);
            }
        }
    }

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Arc::new(CoreConfig::load().expect("load CoreConfig"));
    let knowledge = Arc::new(KnowledgeBase::new());
    let processor = Arc::new(QueryProcessor::new(
        Arc::clone(&knowledge),
        config.guardrail_keywords.clone(),
    ));

    let app = build_app(AppState {
        config: Arc::clone(&config),
        processor,
    });

    let port = config.port;
    let app_name = config.app_name.clone();
    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("{} listening on {}", app_name, addr);
    axum::serve(tokio::net::TcpListener::bind(addr).await.unwrap(), app)
        .await
        .unwrap();
}

fn build_app(state: AppState) -> Router {
    // The chat UI is served from another origin; the API is open by design.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/api/v1/chat", post(chat))
        .route("/api/v1/health", get(health))
        .route("/api/v1/departments", get(departments))
        .with_state(state)
        .layer(cors)
}

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) config: Arc<CoreConfig>,
    pub(crate) processor: Arc<QueryProcessor>,
}

/// Chat request from the UI frontend.
#[derive(serde::Deserialize)]
struct ChatRequest {
    message: String,
    #[serde(default)]
    session_id: Option<String>,
}

/// Chat answer; wire field names match the original public API.
#[derive(serde::Serialize)]
struct ChatResponse {
    response: String,
    is_department_related: bool,
    sources: Vec<String>,
    session_id: Option<String>,
}

/// GET / – service identity and endpoint listing.
async fn root(State(state): State<AppState>) -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "message": state.config.app_name,
        "status": "operational",
        "endpoints": {
            "POST /api/v1/chat": "Ask about UET departments",
            "GET /api/v1/health": "Check service health",
            "GET /api/v1/departments": "List all UET departments"
        }
    }))
}

/// POST /api/v1/chat – answers a department query. The processor is total,
/// so this handler always returns 200 with a response body.
async fn chat(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> axum::Json<ChatResponse> {
    let correlation_id = uuid::Uuid::new_v4();
    tracing::info!(
        target: "deptbot::chat",
        %correlation_id,
        chars = req.message.len(),
        "Chat request received"
    );

    let result = state.processor.process(&req.message);

    tracing::info!(
        target: "deptbot::chat",
        %correlation_id,
        is_related = result.is_related,
        "Chat response composed"
    );
    axum::Json(ChatResponse {
        response: result.text,
        is_department_related: result.is_related,
        sources: result.sources,
        session_id: req.session_id,
    })
}

/// GET /api/v1/health – liveness check for UI and scripts. Always healthy:
/// the responder holds no connections or mutable state that could degrade.
async fn health(State(state): State<AppState>) -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "healthy",
        "service": state.config.app_name,
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// GET /api/v1/departments – static listing of all UET departments.
async fn departments() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "departments": [
            "Computer Science & Information Technology",
            "Electrical Engineering",
            "Mechanical Engineering",
            "Civil Engineering",
            "Architecture & Planning",
            "Chemical Engineering",
            "Mining Engineering",
            "Environmental Engineering"
        ]
    }))
}
