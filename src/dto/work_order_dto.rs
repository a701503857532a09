use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::{AssetKind, FaultKind, FleetSession, OrderType, WorkOrder};

/// Uso acumulado máximo aceptado por el formulario (km u horas)
pub const MAX_USAGE: u32 = 50_000;

// Request para registrar una orden de trabajo
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterWorkOrderRequest {
    pub order_type: OrderType,
    pub asset_kind: AssetKind,
    #[validate(length(min = 1, max = 40))]
    pub asset_ref: String,
    #[serde(default)]
    pub fault: FaultKind,
    #[validate(range(max = 50000))]
    pub usage: u32,
    #[validate(length(min = 1))]
    pub part_name: String,
}

// Fila del historial de órdenes
#[derive(Debug, Serialize)]
pub struct WorkOrderRow {
    pub order_id: u32,
    pub order_type: OrderType,
    pub asset_kind: AssetKind,
    pub asset_ref: String,
    pub fault: FaultKind,
    pub usage: u32,
    pub part_name: String,
    pub quantity: u32,
    pub registered_at: DateTime<Utc>,
}

impl From<&WorkOrder> for WorkOrderRow {
    fn from(order: &WorkOrder) -> Self {
        Self {
            order_id: order.order_id,
            order_type: order.order_type,
            asset_kind: order.asset_kind,
            asset_ref: order.asset_ref.clone(),
            fault: order.fault,
            usage: order.usage,
            part_name: order.part_name.clone(),
            quantity: order.quantity,
            registered_at: order.registered_at,
        }
    }
}

// Opción de repuesto para el selector del formulario
#[derive(Debug, Serialize)]
pub struct PartOption {
    pub name: String,
    pub asset_kind: AssetKind,
}

// Opciones de los selectores del formulario de registro
#[derive(Debug, Serialize)]
pub struct WorkOrderFormOptions {
    pub order_types: Vec<String>,
    pub asset_kinds: Vec<String>,
    pub faults: Vec<String>,
    pub plates: Vec<String>,
    pub equipment_ids: Vec<u32>,
    pub parts: Vec<PartOption>,
    pub max_usage: u32,
}

impl WorkOrderFormOptions {
    pub fn from_session(session: &FleetSession) -> Self {
        Self {
            order_types: vec![
                OrderType::Preventive.label().to_string(),
                OrderType::Corrective.label().to_string(),
            ],
            asset_kinds: vec![
                AssetKind::Truck.label().to_string(),
                AssetKind::ThermoUnit.label().to_string(),
            ],
            faults: FaultKind::catalog()
                .iter()
                .map(|f| f.label().to_string())
                .collect(),
            plates: session.vehicles.iter().map(|v| v.plate.clone()).collect(),
            equipment_ids: session.equipment.iter().map(|e| e.id).collect(),
            parts: session
                .spare_parts
                .iter()
                .map(|p| PartOption {
                    name: p.name.clone(),
                    asset_kind: p.asset_kind,
                })
                .collect(),
            max_usage: MAX_USAGE,
        }
    }
}

// Response genérica
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    pub fn success_with_message(data: T, message: String) -> Self {
        Self {
            success: true,
            message: Some(message),
            data: Some(data),
        }
    }
}
