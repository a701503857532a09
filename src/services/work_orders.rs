//! Servicio de registro de órdenes de trabajo
//!
//! Registra OT preventivas y correctivas descontando el repuesto
//! consumido del almacén. La cantidad consumida se deriva del uso
//! acumulado del activo, no la elige el operador.

use crate::dto::RegisterWorkOrderRequest;
use crate::models::{FleetSession, WorkOrder};
use crate::utils::errors::{insufficient_stock_error, AppError, AppResult};

/// Uso a partir del cual la intervención consume 3 unidades
pub const HIGH_USAGE_THRESHOLD: u32 = 20_000;

/// Uso a partir del cual la intervención consume 2 unidades
pub const MEDIUM_USAGE_THRESHOLD: u32 = 10_000;

/// Servicio de órdenes de trabajo
pub struct WorkOrderService;

impl WorkOrderService {
    /// Unidades de repuesto que consume una intervención según el uso
    /// acumulado del activo (km para camiones, horas para equipos).
    pub fn consumption_for_usage(usage: u32) -> u32 {
        if usage >= HIGH_USAGE_THRESHOLD {
            3
        } else if usage >= MEDIUM_USAGE_THRESHOLD {
            2
        } else {
            1
        }
    }

    /// Registra una orden de trabajo y descuenta el repuesto del almacén.
    ///
    /// La sesión solo se modifica si la orden completa es registrable:
    /// un rechazo por stock o por repuesto inválido deja el almacén y el
    /// historial exactamente como estaban.
    pub fn register(
        session: &mut FleetSession,
        request: RegisterWorkOrderRequest,
    ) -> AppResult<WorkOrder> {
        let quantity = Self::consumption_for_usage(request.usage);

        let part = session.find_part_mut(&request.part_name).ok_or_else(|| {
            AppError::NotFound(format!("Repuesto '{}' no encontrado", request.part_name))
        })?;

        if part.asset_kind != request.asset_kind {
            return Err(AppError::BadRequest(format!(
                "El repuesto '{}' no corresponde a activos de tipo {}",
                part.name, request.asset_kind
            )));
        }

        if part.stock < quantity {
            return Err(insufficient_stock_error());
        }

        part.stock -= quantity;
        let remaining_stock = part.stock;

        let order = WorkOrder {
            order_id: session.next_order_id(),
            order_type: request.order_type,
            asset_kind: request.asset_kind,
            asset_ref: request.asset_ref,
            fault: request.fault,
            usage: request.usage,
            part_name: request.part_name,
            quantity,
            registered_at: chrono::Utc::now(),
        };

        tracing::info!(
            order_id = order.order_id,
            asset = %order.asset_ref,
            part = %order.part_name,
            quantity,
            remaining_stock,
            "Orden de trabajo registrada"
        );

        session.work_orders.push(order.clone());
        Ok(order)
    }
}
