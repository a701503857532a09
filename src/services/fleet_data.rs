//! Servicio de generación de datos de flota
//!
//! Construye la sesión de trabajo con la flota frigorífica completa:
//! camiones, equipos de frío Thermo King y el catálogo inicial de
//! repuestos. Los datos se generan una sola vez por sesión y luego
//! evolucionan únicamente por el registro de órdenes de trabajo.

use chrono::Utc;
use rand::Rng;
use uuid::Uuid;

use crate::models::{
    AssetKind, AssetStatus, Equipment, FleetSession, SparePart, Vehicle, EQUIPMENT_MODEL,
};

/// Cantidad de camiones de la flota
pub const FLEET_SIZE: u32 = 50;

/// Cantidad de equipos de frío instalados
pub const EQUIPMENT_COUNT: u32 = 50;

/// Probabilidad de que un camión esté operativo al generar la flota
const VEHICLE_OPERATIONAL_P: f64 = 0.90;

/// Probabilidad de que un equipo de frío esté operativo
const EQUIPMENT_OPERATIONAL_P: f64 = 0.88;

/// Rango de kilometraje inicial de los camiones
const MILEAGE_RANGE_KM: std::ops::Range<u32> = 3_000..30_000;

/// Rango de horas de uso inicial de los equipos de frío
const HOURS_RANGE: std::ops::Range<u32> = 100..2_000;

/// Servicio de generación de datos de flota
pub struct FleetDataService;

impl FleetDataService {
    /// Genera una sesión nueva con flota, equipos y repuestos iniciales
    pub fn generate_session() -> FleetSession {
        let mut rng = rand::thread_rng();

        let vehicles = (1..=FLEET_SIZE)
            .map(|i| Vehicle {
                id: i,
                plate: format!("TRK-{:03}", i),
                status: if rng.gen_bool(VEHICLE_OPERATIONAL_P) {
                    AssetStatus::Operational
                } else {
                    AssetStatus::Maintenance
                },
                mileage_km: rng.gen_range(MILEAGE_RANGE_KM),
            })
            .collect();

        let equipment = (1..=EQUIPMENT_COUNT)
            .map(|i| Equipment {
                id: i,
                model: EQUIPMENT_MODEL.to_string(),
                status: if rng.gen_bool(EQUIPMENT_OPERATIONAL_P) {
                    AssetStatus::Operational
                } else {
                    AssetStatus::Maintenance
                },
                hours: rng.gen_range(HOURS_RANGE),
            })
            .collect();

        FleetSession {
            session_id: Uuid::new_v4(),
            started_at: Utc::now(),
            vehicles,
            equipment,
            spare_parts: Self::seed_spare_parts(),
            work_orders: Vec::new(),
        }
    }

    /// Catálogo inicial de repuestos del almacén
    fn seed_spare_parts() -> Vec<SparePart> {
        vec![
            SparePart {
                id: 1,
                name: "Filtro Aceite Motor".to_string(),
                asset_kind: AssetKind::Truck,
                stock: 40,
                min_stock: 8,
            },
            SparePart {
                id: 2,
                name: "Pastillas de Freno".to_string(),
                asset_kind: AssetKind::Truck,
                stock: 25,
                min_stock: 10,
            },
            SparePart {
                id: 3,
                name: "Filtro Aire Thermo King".to_string(),
                asset_kind: AssetKind::ThermoUnit,
                stock: 18,
                min_stock: 6,
            },
            SparePart {
                id: 4,
                name: "Sensor de Temperatura".to_string(),
                asset_kind: AssetKind::ThermoUnit,
                stock: 10,
                min_stock: 4,
            },
        ]
    }
}
