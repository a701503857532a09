//! Services module
//!
//! Este módulo contiene la lógica de negocio del tablero: generación de
//! la flota simulada, cálculo de indicadores, telemetría y registro de
//! órdenes de trabajo.

pub mod fleet_data;
pub mod metrics;
pub mod telemetry;
pub mod work_orders;

pub use fleet_data::FleetDataService;
pub use metrics::{KpiValues, MetricsService};
pub use telemetry::TelemetryService;
pub use work_orders::WorkOrderService;
