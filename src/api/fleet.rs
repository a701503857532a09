//! Handlers de flota
//!
//! Este módulo expone las vistas de camiones y equipos de frío.

use axum::{extract::State, routing::get, Json, Router};

use crate::dto::{EquipmentRow, VehicleRow};
use crate::state::AppState;

/// Crear el router de flota
pub fn create_fleet_router() -> Router<AppState> {
    Router::new()
        .route("/vehicles", get(get_vehicles))    // Camiones
        .route("/equipment", get(get_equipment))  // Equipos de frío
}

/// Obtener todos los camiones de la flota
pub async fn get_vehicles(State(state): State<AppState>) -> Json<Vec<VehicleRow>> {
    let vehicles = state
        .sessions
        .read(|session| session.vehicles.iter().map(VehicleRow::from).collect())
        .await;

    Json(vehicles)
}

/// Obtener todos los equipos de frío instalados
pub async fn get_equipment(State(state): State<AppState>) -> Json<Vec<EquipmentRow>> {
    let equipment = state
        .sessions
        .read(|session| session.equipment.iter().map(EquipmentRow::from).collect())
        .await;

    Json(equipment)
}
