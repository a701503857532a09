//! Modelos del sistema
//!
//! Este módulo contiene las tablas en memoria de la sesión y sus tipos
//! enumerados. Los catálogos fijos del tablero (estado, tipo de OT, tipo
//! de activo, falla) son enums cerrados que serializan con su etiqueta
//! en español.

pub mod equipment;
pub mod session;
pub mod spare_part;
pub mod vehicle;
pub mod work_order;

pub use equipment::{Equipment, EQUIPMENT_MODEL};
pub use session::FleetSession;
pub use spare_part::{AssetKind, SparePart};
pub use vehicle::{AssetStatus, Vehicle};
pub use work_order::{FaultKind, OrderType, WorkOrder};
