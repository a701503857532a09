//! Sesión de flota
//!
//! Contenedor de las cuatro tablas en memoria que viven mientras dure la
//! sesión del tablero. No hay persistencia: al reiniciar el proceso se
//! genera una sesión nueva con datos frescos.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::equipment::Equipment;
use super::spare_part::SparePart;
use super::vehicle::Vehicle;
use super::work_order::WorkOrder;

/// Estado completo de una sesión del tablero
#[derive(Debug, Clone)]
pub struct FleetSession {
    /// Identifica el dataset memoizado entre renders
    pub session_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub vehicles: Vec<Vehicle>,
    pub equipment: Vec<Equipment>,
    pub spare_parts: Vec<SparePart>,
    pub work_orders: Vec<WorkOrder>,
}

impl FleetSession {
    /// Siguiente id de OT: secuencial, 1-based, sin huecos
    pub fn next_order_id(&self) -> u32 {
        self.work_orders.len() as u32 + 1
    }

    pub fn find_part_mut(&mut self, name: &str) -> Option<&mut SparePart> {
        self.spare_parts.iter_mut().find(|p| p.name == name)
    }
}
