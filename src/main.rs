use anyhow::Context;
use axum::{routing::get, routing::post, Router};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use address_api_rust::database::manager::DatabaseManager;
use address_api_rust::handlers;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = address_api_rust::config::config();
    tracing::info!("Starting Address API in {:?} mode", config.environment);

    // Idempotent PostGIS/table bootstrap. No storage, no server.
    DatabaseManager::init_schema()
        .await
        .context("failed to initialize database schema")?;

    let app = app();

    // Allow tests or deployments to override port via env
    let port = std::env::var("ADDRESS_API_PORT")
        .ok()
        .or_else(|| std::env::var("PORT").ok())
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(3000);

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    println!("🚀 Address API Rust server listening on http://{}", bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}

fn app() -> Router {
    Router::new()
        // Public service endpoints
        .route("/", get(root))
        .route("/health", get(health))
        // Address CRUD + radius search
        .merge(address_routes())
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

fn address_routes() -> Router {
    use handlers::address;

    Router::new()
        // Collection operations (trailing slash is part of the published surface)
        .route(
            "/address/",
            post(address::address_create).get(address::address_list),
        )
        // Item operations
        .route(
            "/address/:id",
            get(address::address_show)
                .patch(address::address_update)
                .delete(address::address_delete),
        )
}

async fn root() -> axum::response::Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    axum::response::Json(json!({
        "success": true,
        "data": {
            "name": "Address API (Rust)",
            "version": version,
            "description": "Postal address CRUD with PostGIS radius search, built with Rust (Axum)",
            "endpoints": {
                "home": "/ (public)",
                "health": "/health (public)",
                "addresses": "/address/ [GET, POST], /address/:id [GET, PATCH, DELETE]",
            },
            "notes": {
                "radius_search": "GET /address/?distance=&latitude=&longitude= filters to points within distance of the center; distance is in CRS degrees (SRID 4326), not meters",
            }
        }
    }))
}

async fn health() -> impl axum::response::IntoResponse {
    let now = chrono::Utc::now();

    match DatabaseManager::health_check().await {
        Ok(_) => (
            axum::http::StatusCode::OK,
            axum::response::Json(json!({
                "success": true,
                "data": {
                    "status": "ok",
                    "timestamp": now,
                    "database": "ok"
                }
            })),
        ),
        Err(e) => (
            axum::http::StatusCode::SERVICE_UNAVAILABLE,
            axum::response::Json(json!({
                "success": false,
                "error": "database unavailable",
                "data": {
                    "status": "degraded",
                    "timestamp": now,
                    "database_error": e.to_string()
                }
            })),
        ),
    }
}
