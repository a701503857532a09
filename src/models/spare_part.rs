//! Modelo de SparePart
//!
//! Repuestos del almacén (kardex). `stock` es el único campo mutable de
//! todo el sistema: lo descuenta el registro de órdenes de trabajo, que
//! además garantiza que nunca quede negativo.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Tipo de activo al que aplica un repuesto o una orden de trabajo
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AssetKind {
    #[serde(rename = "Camión")]
    Truck,
    #[serde(rename = "Thermo King")]
    ThermoUnit,
}

impl AssetKind {
    /// Etiqueta en español, tal como la muestra el formulario
    pub fn label(&self) -> &'static str {
        match self {
            AssetKind::Truck => "Camión",
            AssetKind::ThermoUnit => "Thermo King",
        }
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Repuesto del kardex
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SparePart {
    pub id: u32,
    pub name: String,
    pub asset_kind: AssetKind,
    pub stock: u32,
    pub min_stock: u32,
}

impl SparePart {
    /// Disponible para el KPI de repuestos: estrictamente por encima del
    /// mínimo (un repuesto justo en el umbral NO cuenta como disponible)
    pub fn is_above_minimum(&self) -> bool {
        self.stock > self.min_stock
    }

    /// Nivel crítico: dispara el banner de alertas del tablero
    pub fn is_critical(&self) -> bool {
        self.stock <= self.min_stock
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn part(stock: u32, min_stock: u32) -> SparePart {
        SparePart {
            id: 1,
            name: "Pastillas de Freno".to_string(),
            asset_kind: AssetKind::Truck,
            stock,
            min_stock,
        }
    }

    #[test]
    fn test_stock_at_minimum_is_not_available() {
        assert!(!part(10, 10).is_above_minimum());
        assert!(part(11, 10).is_above_minimum());
    }

    #[test]
    fn test_stock_at_minimum_is_critical() {
        assert!(part(10, 10).is_critical());
        assert!(part(3, 10).is_critical());
        assert!(!part(11, 10).is_critical());
    }

    #[test]
    fn test_asset_kind_serializes_as_spanish_label() {
        assert_eq!(
            serde_json::to_string(&AssetKind::ThermoUnit).unwrap(),
            "\"Thermo King\""
        );
        assert_eq!(serde_json::to_string(&AssetKind::Truck).unwrap(), "\"Camión\"");
    }
}
