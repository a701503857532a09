//! Handlers de órdenes de trabajo
//!
//! Este módulo expone el historial de OT, las opciones del formulario
//! de registro y el registro propiamente dicho.

use axum::{extract::State, routing::get, Json, Router};
use validator::Validate;

use crate::dto::{ApiResponse, RegisterWorkOrderRequest, WorkOrderFormOptions, WorkOrderRow};
use crate::services::WorkOrderService;
use crate::state::AppState;
use crate::utils::errors::AppResult;

/// Crear el router de órdenes de trabajo
pub fn create_work_order_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_work_orders).post(register_work_order))  // Historial y registro
        .route("/options", get(get_form_options))                    // Selectores del formulario
}

/// Obtener el historial de órdenes registradas en la sesión
pub async fn get_work_orders(State(state): State<AppState>) -> Json<Vec<WorkOrderRow>> {
    let orders = state
        .sessions
        .read(|session| session.work_orders.iter().map(WorkOrderRow::from).collect())
        .await;

    Json(orders)
}

/// Obtener los catálogos que alimentan el formulario de registro
pub async fn get_form_options(State(state): State<AppState>) -> Json<WorkOrderFormOptions> {
    let options = state
        .sessions
        .read(WorkOrderFormOptions::from_session)
        .await;

    Json(options)
}

/// Registrar una orden de trabajo y descontar el repuesto consumido
pub async fn register_work_order(
    State(state): State<AppState>,
    Json(request): Json<RegisterWorkOrderRequest>,
) -> AppResult<Json<ApiResponse<WorkOrderRow>>> {
    request.validate()?;

    let order = state
        .sessions
        .write(|session| WorkOrderService::register(session, request))
        .await?;

    Ok(Json(ApiResponse::success_with_message(
        WorkOrderRow::from(&order),
        "Orden registrada y repuesto descontado".to_string(),
    )))
}
