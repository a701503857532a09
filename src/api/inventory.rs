//! Handlers de inventario
//!
//! Este módulo expone el kardex de repuestos y las alertas de stock
//! crítico.

use axum::{extract::State, routing::get, Json, Router};

use crate::dto::{AlertPanel, SparePartRow};
use crate::state::AppState;

/// Crear el router de inventario
pub fn create_inventory_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_inventory))      // Kardex completo
        .route("/alerts", get(get_alerts))   // Repuestos críticos
}

/// Obtener el kardex de repuestos
pub async fn get_inventory(State(state): State<AppState>) -> Json<Vec<SparePartRow>> {
    let parts = state
        .sessions
        .read(|session| session.spare_parts.iter().map(SparePartRow::from).collect())
        .await;

    Json(parts)
}

/// Obtener los repuestos en o por debajo de su stock mínimo
pub async fn get_alerts(State(state): State<AppState>) -> Json<AlertPanel> {
    let alerts = state.sessions.read(AlertPanel::from_session).await;

    Json(alerts)
}
