use serde::Serialize;

use crate::models::{AssetKind, AssetStatus, Equipment, SparePart, Vehicle};

// Fila de camión para las vistas de flota
#[derive(Debug, Serialize)]
pub struct VehicleRow {
    pub id: u32,
    pub plate: String,
    pub status: AssetStatus,
    pub mileage_km: u32,
}

impl From<&Vehicle> for VehicleRow {
    fn from(vehicle: &Vehicle) -> Self {
        Self {
            id: vehicle.id,
            plate: vehicle.plate.clone(),
            status: vehicle.status,
            mileage_km: vehicle.mileage_km,
        }
    }
}

// Fila de equipo de frío
#[derive(Debug, Serialize)]
pub struct EquipmentRow {
    pub id: u32,
    pub model: String,
    pub status: AssetStatus,
    pub hours: u32,
}

impl From<&Equipment> for EquipmentRow {
    fn from(unit: &Equipment) -> Self {
        Self {
            id: unit.id,
            model: unit.model.clone(),
            status: unit.status,
            hours: unit.hours,
        }
    }
}

// Fila del kardex de repuestos
#[derive(Debug, Serialize)]
pub struct SparePartRow {
    pub id: u32,
    pub name: String,
    pub asset_kind: AssetKind,
    pub stock: u32,
    pub min_stock: u32,
    pub critical: bool,
}

impl From<&SparePart> for SparePartRow {
    fn from(part: &SparePart) -> Self {
        Self {
            id: part.id,
            name: part.name.clone(),
            asset_kind: part.asset_kind,
            stock: part.stock,
            min_stock: part.min_stock,
            critical: part.is_critical(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spare_part_row_critical_flag() {
        let part = SparePart {
            id: 4,
            name: "Sensor de Temperatura".to_string(),
            asset_kind: AssetKind::ThermoUnit,
            stock: 4,
            min_stock: 4,
        };

        let row = SparePartRow::from(&part);
        assert!(row.critical);

        let healthy = SparePart { stock: 5, ..part };
        assert!(!SparePartRow::from(&healthy).critical);
    }
}
