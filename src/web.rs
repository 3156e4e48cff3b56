//! HTTP endpoints. A thin one-to-one mapping from REST routes to
//! storage operations; JSON in, JSON out, no validation or auth.

use crate::errors::DepotError;
use crate::settings::Settings;
use crate::storage::{self, NewDevice};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use miette::IntoDiagnostic;
use sea_orm::DatabaseConnection;
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub db: DatabaseConnection,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(welcome))
        .route("/health", get(health))
        .route("/devices", get(list_devices).post(create_device))
        .route(
            "/devices/{id}",
            get(get_device).delete(delete_device),
        )
        // The browser/CLI clients are served from elsewhere, so every
        // origin is allowed, as the original deployment did.
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn serve(settings: Settings, db: DatabaseConnection) -> miette::Result<()> {
    let state = AppState {
        settings: Arc::new(settings),
        db,
    };

    let addr: SocketAddr = format!(
        "{}:{}",
        state.settings.server.host, state.settings.server.port
    )
    .parse()
    .map_err(|e| miette::miette!("bad listen addr: {e}"))?;

    let app = router(state);

    let listener = tokio::net::TcpListener::bind(addr).await.into_diagnostic()?;
    tracing::info!(%addr, "Device inventory API listening");
    axum::serve(listener, app).await.into_diagnostic()?;
    Ok(())
}

/// Map a storage failure onto the wire: a missing id is a 404, anything
/// else is a generic 500 with the original error kept server-side.
fn store_error(context: &str, err: DepotError) -> (StatusCode, Json<serde_json::Value>) {
    match err {
        DepotError::NotFound => (
            StatusCode::NOT_FOUND,
            Json(json!({"error": "Device not found"})),
        ),
        other => {
            tracing::error!(error = %other, "{context}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "Internal server error"})),
            )
        }
    }
}

async fn welcome() -> &'static str {
    "Welcome to the Device Management System"
}

async fn health() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

async fn list_devices(State(state): State<AppState>) -> impl IntoResponse {
    match storage::list_devices(&state.db).await {
        Ok(devices) => (StatusCode::OK, Json(json!(devices))),
        Err(e) => store_error("Error querying devices", e),
    }
}

async fn get_device(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> impl IntoResponse {
    match storage::get_device(&state.db, id).await {
        Ok(Some(device)) => (StatusCode::OK, Json(json!(device))),
        Ok(None) => store_error("", DepotError::NotFound),
        Err(e) => store_error("Error querying device details", e),
    }
}

async fn create_device(
    State(state): State<AppState>,
    Json(input): Json<NewDevice>,
) -> impl IntoResponse {
    match storage::insert_device(&state.db, input).await {
        // Always echo the created row so the client learns the id.
        Ok(device) => (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "message": "Device added successfully",
                "device": device,
            })),
        ),
        Err(e) => store_error("Error inserting into devices", e),
    }
}

async fn delete_device(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> impl IntoResponse {
    match storage::delete_device(&state.db, id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "message": "Device deleted successfully",
            })),
        ),
        Err(e) => store_error("Error deleting device", e),
    }
}
