//! Handlers del tablero
//!
//! Este módulo arma el árbol de render completo del tablero y los
//! paneles individuales de KPIs y telemetría.

use axum::{extract::State, routing::get, Json, Router};

use crate::dto::{
    AlertPanel, DashboardResponse, KpiPanel, SessionInfo, SparePartRow, TelemetryResponse,
    WorkOrderFormOptions, WorkOrderRow,
};
use crate::services::{MetricsService, TelemetryService};
use crate::state::AppState;

/// Crear el router del tablero
pub fn create_dashboard_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_dashboard))           // Árbol completo
        .route("/kpis", get(get_kpis))            // Panel de indicadores
        .route("/telemetry", get(get_telemetry))  // Serie de temperatura
}

/// Obtener el tablero completo, en el orden en que se pinta
pub async fn get_dashboard(State(state): State<AppState>) -> Json<DashboardResponse> {
    let dashboard = state
        .sessions
        .read(|session| DashboardResponse {
            session: SessionInfo::from(session),
            kpis: KpiPanel::from(MetricsService::kpi_panel(session)),
            telemetry: TelemetryResponse::new(TelemetryService::temperature_series()),
            form: WorkOrderFormOptions::from_session(session),
            kardex: session.spare_parts.iter().map(SparePartRow::from).collect(),
            history: session.work_orders.iter().map(WorkOrderRow::from).collect(),
            alerts: AlertPanel::from_session(session),
        })
        .await;

    Json(dashboard)
}

/// Obtener solo el panel de KPIs
pub async fn get_kpis(State(state): State<AppState>) -> Json<KpiPanel> {
    let kpis = state
        .sessions
        .read(|session| KpiPanel::from(MetricsService::kpi_panel(session)))
        .await;

    Json(kpis)
}

/// Obtener una serie fresca de telemetría de temperatura
pub async fn get_telemetry() -> Json<TelemetryResponse> {
    Json(TelemetryResponse::new(TelemetryService::temperature_series()))
}
