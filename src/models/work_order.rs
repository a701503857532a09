//! Modelo de WorkOrder
//!
//! Órdenes de trabajo (OT) de mantenimiento. La tabla es append-only: las
//! órdenes solo se crean vía el registro, nunca se editan ni se borran, y
//! `order_id` crece de a uno empezando en 1.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::spare_part::AssetKind;

/// Tipo de orden de trabajo
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum OrderType {
    #[serde(rename = "Preventivo")]
    Preventive,
    #[serde(rename = "Correctivo")]
    Corrective,
}

impl OrderType {
    pub fn label(&self) -> &'static str {
        match self {
            OrderType::Preventive => "Preventivo",
            OrderType::Corrective => "Correctivo",
        }
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Falla reportada en la OT (catálogo fijo del formulario)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum FaultKind {
    #[default]
    #[serde(rename = "No aplica")]
    NotApplicable,
    #[serde(rename = "Refrigeración insuficiente")]
    InsufficientCooling,
    #[serde(rename = "Sensor de temperatura")]
    TemperatureSensor,
    #[serde(rename = "Fuga de refrigerante")]
    RefrigerantLeak,
    #[serde(rename = "Falla eléctrica")]
    ElectricalFailure,
    #[serde(rename = "Filtro obstruido")]
    CloggedFilter,
}

impl FaultKind {
    pub fn label(&self) -> &'static str {
        match self {
            FaultKind::NotApplicable => "No aplica",
            FaultKind::InsufficientCooling => "Refrigeración insuficiente",
            FaultKind::TemperatureSensor => "Sensor de temperatura",
            FaultKind::RefrigerantLeak => "Fuga de refrigerante",
            FaultKind::ElectricalFailure => "Falla eléctrica",
            FaultKind::CloggedFilter => "Filtro obstruido",
        }
    }

    /// Catálogo completo, en el orden del formulario
    pub fn catalog() -> [FaultKind; 6] {
        [
            FaultKind::NotApplicable,
            FaultKind::InsufficientCooling,
            FaultKind::TemperatureSensor,
            FaultKind::RefrigerantLeak,
            FaultKind::ElectricalFailure,
            FaultKind::CloggedFilter,
        ]
    }
}

impl fmt::Display for FaultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Orden de trabajo registrada
///
/// `asset_ref` guarda la placa del camión o el id del equipo según
/// `asset_kind`; es una referencia suelta, sin verificación contra las
/// tablas de flota. `usage` es el kilometraje u horas al momento del
/// servicio y `quantity` las unidades de repuesto descontadas.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkOrder {
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

impl WorkOrder {
    pub fn is_corrective(&self) -> bool {
        self.order_type == OrderType::Corrective
    }
}
