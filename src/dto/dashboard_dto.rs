use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::dto::fleet_dto::SparePartRow;
use crate::dto::work_order_dto::{WorkOrderFormOptions, WorkOrderRow};
use crate::models::FleetSession;
use crate::services::metrics::KpiValues;
use crate::services::telemetry::TARGET_TEMPERATURE_C;

// Identificación de la sesión activa
#[derive(Debug, Serialize)]
pub struct SessionInfo {
    pub session_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub vehicle_count: usize,
    pub equipment_count: usize,
}

impl From<&FleetSession> for SessionInfo {
    fn from(session: &FleetSession) -> Self {
        Self {
            session_id: session.session_id,
            started_at: session.started_at,
            vehicle_count: session.vehicles.len(),
            equipment_count: session.equipment.len(),
        }
    }
}

// Panel de KPIs del tablero
//
// Los indicadores sin valor (MTBF/MTTR sin órdenes correctivas) viajan
// como null y el cliente los muestra como "N/A".
#[derive(Debug, Serialize)]
pub struct KpiPanel {
    pub vehicle_availability_pct: f64,
    pub equipment_availability_pct: f64,
    pub parts_availability_pct: f64,
    pub mtbf_hours: Option<f64>,
    pub mttr_hours: Option<f64>,
}

impl From<KpiValues> for KpiPanel {
    fn from(values: KpiValues) -> Self {
        Self {
            vehicle_availability_pct: values.vehicle_availability_pct,
            equipment_availability_pct: values.equipment_availability_pct,
            parts_availability_pct: values.parts_availability_pct,
            mtbf_hours: values.mtbf_hours,
            mttr_hours: values.mttr_hours,
        }
    }
}

// Serie de temperatura de las últimas 24 horas
#[derive(Debug, Serialize)]
pub struct TelemetryResponse {
    pub unit: String,
    pub target_c: f64,
    pub samples: Vec<f64>,
}

impl TelemetryResponse {
    pub fn new(samples: Vec<f64>) -> Self {
        Self {
            unit: "°C".to_string(),
            target_c: TARGET_TEMPERATURE_C,
            samples,
        }
    }
}

// Estado del banner de alertas de stock
#[derive(Debug, Serialize)]
pub struct AlertPanel {
    pub has_critical: bool,
    pub parts: Vec<SparePartRow>,
}

impl AlertPanel {
    pub fn from_session(session: &FleetSession) -> Self {
        let parts: Vec<SparePartRow> = session
            .spare_parts
            .iter()
            .filter(|p| p.is_critical())
            .map(SparePartRow::from)
            .collect();

        Self {
            has_critical: !parts.is_empty(),
            parts,
        }
    }
}

// Árbol completo del tablero, en el orden en que se pinta
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub session: SessionInfo,
    pub kpis: KpiPanel,
    pub telemetry: TelemetryResponse,
    pub form: WorkOrderFormOptions,
    pub kardex: Vec<SparePartRow>,
    pub history: Vec<WorkOrderRow>,
    pub alerts: AlertPanel,
}
