//! Modelo de Equipment
//!
//! Equipos de refrigeración (unidades Thermo King) montados sobre la flota.
//! Igual que los vehículos, la tabla es inmutable después de generarse.

use serde::{Deserialize, Serialize};

use super::vehicle::AssetStatus;

/// Modelo comercial de todos los equipos simulados
pub const EQUIPMENT_MODEL: &str = "Thermo King";

/// Equipo de frío de la flota
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Equipment {
    pub id: u32,
    pub model: String,
    pub status: AssetStatus,
    pub hours: u32,
}

impl Equipment {
    pub fn is_operational(&self) -> bool {
        self.status == AssetStatus::Operational
    }
}
