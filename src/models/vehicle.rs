//! Modelo de Vehicle
//!
//! Vehículos de la flota frigorífica. La tabla se genera al inicio de la
//! sesión y no se modifica después: el estado operativo es una foto de la
//! sesión, no un proceso monitoreado en vivo.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Estado operativo de un activo (vehículo o equipo de frío)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AssetStatus {
    #[serde(rename = "Operativo")]
    Operational,
    #[serde(rename = "Mantenimiento")]
    Maintenance,
}

impl AssetStatus {
    /// Etiqueta en español, tal como la muestra el tablero
    pub fn label(&self) -> &'static str {
        match self {
            AssetStatus::Operational => "Operativo",
            AssetStatus::Maintenance => "Mantenimiento",
        }
    }
}

impl fmt::Display for AssetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Vehículo de la flota
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: u32,
    pub plate: String,
    pub status: AssetStatus,
    pub mileage_km: u32,
}

impl Vehicle {
    pub fn is_operational(&self) -> bool {
        self.status == AssetStatus::Operational
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_labels() {
        assert_eq!(AssetStatus::Operational.to_string(), "Operativo");
        assert_eq!(AssetStatus::Maintenance.to_string(), "Mantenimiento");
    }

    #[test]
    fn test_status_serializes_as_spanish_label() {
        let json = serde_json::to_string(&AssetStatus::Operational).unwrap();
        assert_eq!(json, "\"Operativo\"");
    }
}
