//! Backend del tablero CMMS para una flota de camiones frigoríficos
//!
//! El servicio genera una flota simulada con sus equipos de frío y su
//! almacén de repuestos, calcula los KPIs de mantenimiento y registra
//! órdenes de trabajo descontando stock. Todo vive en memoria durante
//! la sesión del proceso.

pub mod api;
pub mod config;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

use axum::Router;
use tower_http::trace::TraceLayer;

use middleware::cors::{cors_middleware, cors_middleware_with_origins};
use state::AppState;

/// Nombre del servicio
pub const APP_NAME: &str = "CMMS Pro – Flota Frigorífica";

/// Versión del paquete
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Construye la aplicación Axum completa, con middleware y estado
pub fn build_app(state: AppState) -> Router {
    let cors = if state.config.cors_origins.is_empty() {
        cors_middleware()
    } else {
        cors_middleware_with_origins(state.config.cors_origins.clone())
    };

    api::create_api_router()
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
