use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::info;

use cmms_flota::config::environment::EnvironmentConfig;
use cmms_flota::state::AppState;
use cmms_flota::{build_app, APP_NAME, VERSION};

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🚚❄️ {} v{}", APP_NAME, VERSION);
    info!("==========================================");

    let config = EnvironmentConfig::default();
    let addr: SocketAddr = config.server_url().parse()?;

    let app_state = AppState::new(config);
    let app = build_app(app_state);

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("📊 Tablero:");
    info!("   GET  /api/dashboard - Tablero completo");
    info!("   GET  /api/dashboard/kpis - Panel de KPIs");
    info!("   GET  /api/dashboard/telemetry - Temperatura últimas 24 h");
    info!("🚛 Flota:");
    info!("   GET  /api/fleet/vehicles - Camiones");
    info!("   GET  /api/fleet/equipment - Equipos de frío");
    info!("📦 Inventario:");
    info!("   GET  /api/inventory - Kardex de repuestos");
    info!("   GET  /api/inventory/alerts - Alertas de stock crítico");
    info!("🔧 Órdenes de trabajo:");
    info!("   GET  /api/work-orders - Historial de OT");
    info!("   GET  /api/work-orders/options - Opciones del formulario");
    info!("   POST /api/work-orders - Registrar OT");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
