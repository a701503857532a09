//! DTOs de la API
//!
//! Este módulo contiene los requests y las vistas JSON que consume el
//! frontend del tablero, separados de los modelos de dominio.

pub mod dashboard_dto;
pub mod fleet_dto;
pub mod work_order_dto;

pub use dashboard_dto::{
    AlertPanel, DashboardResponse, KpiPanel, SessionInfo, TelemetryResponse,
};
pub use fleet_dto::{EquipmentRow, SparePartRow, VehicleRow};
pub use work_order_dto::{
    ApiResponse, RegisterWorkOrderRequest, WorkOrderFormOptions, WorkOrderRow,
};
