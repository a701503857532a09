//! API endpoints
//!
//! Este módulo contiene los endpoints de la API del tablero.

pub mod dashboard;
pub mod fleet;
pub mod inventory;
pub mod work_orders;

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};

use crate::state::AppState;

/// Crear el router principal de la API
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .nest("/api/dashboard", dashboard::create_dashboard_router())
        .nest("/api/fleet", fleet::create_fleet_router())
        .nest("/api/inventory", inventory::create_inventory_router())
        .nest("/api/work-orders", work_orders::create_work_order_router())
}

/// Health check del servicio
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "service": crate::APP_NAME,
        "version": crate::VERSION,
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
