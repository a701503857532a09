//! Tests de la superficie de lectura del tablero

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use cmms_flota::config::environment::EnvironmentConfig;
use cmms_flota::state::AppState;
use cmms_flota::{build_app, APP_NAME};

fn test_config() -> EnvironmentConfig {
    EnvironmentConfig {
        environment: "test".to_string(),
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec![],
    }
}

fn test_app() -> Router {
    build_app(AppState::new(test_config()))
}

async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap();
    (status, body)
}

#[tokio::test]
async fn test_health_check() {
    let app = test_app();
    let (status, body) = get_json(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["service"], APP_NAME);
    assert_eq!(body["status"], "healthy");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_dashboard_sections_in_render_order() {
    let app = test_app();
    let (status, body) = get_json(&app, "/api/dashboard").await;

    assert_eq!(status, StatusCode::OK);
    for section in ["session", "kpis", "telemetry", "form", "kardex", "history", "alerts"] {
        assert!(body.get(section).is_some(), "falta la sección {}", section);
    }

    assert_eq!(body["session"]["vehicle_count"], 50);
    assert_eq!(body["session"]["equipment_count"], 50);
    assert_eq!(body["kardex"].as_array().unwrap().len(), 4);
    assert_eq!(body["history"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_kpis_within_percentage_bounds() {
    let app = test_app();
    let (status, body) = get_json(&app, "/api/dashboard/kpis").await;

    assert_eq!(status, StatusCode::OK);
    for field in [
        "vehicle_availability_pct",
        "equipment_availability_pct",
        "parts_availability_pct",
    ] {
        let value = body[field].as_f64().unwrap();
        assert!((0.0..=100.0).contains(&value), "{} = {}", field, value);
    }

    // Sin órdenes correctivas los indicadores de confiabilidad no aplican
    assert!(body["mtbf_hours"].is_null());
    assert!(body["mttr_hours"].is_null());

    // El almacén arranca sin repuestos críticos
    assert_eq!(body["parts_availability_pct"], 100.0);
}

#[tokio::test]
async fn test_kpis_stable_without_mutations() {
    let app = test_app();
    let (_, first) = get_json(&app, "/api/dashboard/kpis").await;
    let (_, second) = get_json(&app, "/api/dashboard/kpis").await;

    assert_eq!(first["vehicle_availability_pct"], second["vehicle_availability_pct"]);
    assert_eq!(first["equipment_availability_pct"], second["equipment_availability_pct"]);
    assert_eq!(first["parts_availability_pct"], second["parts_availability_pct"]);
    assert_eq!(first["mtbf_hours"], second["mtbf_hours"]);
}

#[tokio::test]
async fn test_telemetry_series_shape() {
    let app = test_app();
    let (status, body) = get_json(&app, "/api/dashboard/telemetry").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["unit"], "°C");
    assert_eq!(body["target_c"], -18.0);

    let samples = body["samples"].as_array().unwrap();
    assert_eq!(samples.len(), 24);
    for sample in samples {
        let value = sample.as_f64().unwrap();
        assert!((value + 18.0).abs() < 3.0, "muestra fuera de rango: {}", value);
    }
}

#[tokio::test]
async fn test_telemetry_regenerated_per_render() {
    let app = test_app();
    let (_, first) = get_json(&app, "/api/dashboard/telemetry").await;
    let (_, second) = get_json(&app, "/api/dashboard/telemetry").await;

    assert_ne!(first["samples"], second["samples"]);
}

#[tokio::test]
async fn test_fleet_vehicles_view() {
    let app = test_app();
    let (status, body) = get_json(&app, "/api/fleet/vehicles").await;

    assert_eq!(status, StatusCode::OK);
    let vehicles = body.as_array().unwrap();
    assert_eq!(vehicles.len(), 50);

    assert_eq!(vehicles[0]["plate"], "TRK-001");
    assert_eq!(vehicles[49]["plate"], "TRK-050");

    for vehicle in vehicles {
        let status_label = vehicle["status"].as_str().unwrap();
        assert!(
            status_label == "Operativo" || status_label == "Mantenimiento",
            "estado inesperado: {}",
            status_label
        );
        let mileage = vehicle["mileage_km"].as_u64().unwrap();
        assert!((3_000..30_000).contains(&mileage));
    }
}

#[tokio::test]
async fn test_fleet_equipment_view() {
    let app = test_app();
    let (status, body) = get_json(&app, "/api/fleet/equipment").await;

    assert_eq!(status, StatusCode::OK);
    let equipment = body.as_array().unwrap();
    assert_eq!(equipment.len(), 50);

    for unit in equipment {
        assert_eq!(unit["model"], "Thermo King");
        let hours = unit["hours"].as_u64().unwrap();
        assert!((100..2_000).contains(&hours));
    }
}

#[tokio::test]
async fn test_inventory_kardex_seed() {
    let app = test_app();
    let (status, body) = get_json(&app, "/api/inventory").await;

    assert_eq!(status, StatusCode::OK);
    let parts = body.as_array().unwrap();
    assert_eq!(parts.len(), 4);

    assert_eq!(parts[0]["name"], "Filtro Aceite Motor");
    assert_eq!(parts[0]["asset_kind"], "Camión");
    assert_eq!(parts[0]["stock"], 40);
    assert_eq!(parts[0]["min_stock"], 8);
    assert_eq!(parts[0]["critical"], false);

    assert_eq!(parts[3]["name"], "Sensor de Temperatura");
    assert_eq!(parts[3]["asset_kind"], "Thermo King");
    assert_eq!(parts[3]["stock"], 10);
    assert_eq!(parts[3]["min_stock"], 4);
}

#[tokio::test]
async fn test_inventory_alerts_start_empty() {
    let app = test_app();
    let (status, body) = get_json(&app, "/api/inventory/alerts").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["has_critical"], false);
    assert_eq!(body["parts"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_form_options_catalogs() {
    let app = test_app();
    let (status, body) = get_json(&app, "/api/work-orders/options").await;

    assert_eq!(status, StatusCode::OK);

    let order_types: Vec<&str> = body["order_types"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect();
    assert_eq!(order_types, ["Preventivo", "Correctivo"]);

    let asset_kinds: Vec<&str> = body["asset_kinds"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect();
    assert_eq!(asset_kinds, ["Camión", "Thermo King"]);

    let faults: Vec<&str> = body["faults"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect();
    assert_eq!(
        faults,
        [
            "No aplica",
            "Refrigeración insuficiente",
            "Sensor de temperatura",
            "Fuga de refrigerante",
            "Falla eléctrica",
            "Filtro obstruido",
        ]
    );

    assert_eq!(body["plates"].as_array().unwrap().len(), 50);
    assert_eq!(body["equipment_ids"].as_array().unwrap().len(), 50);
    assert_eq!(body["parts"].as_array().unwrap().len(), 4);
    assert_eq!(body["max_usage"], 50_000);
}

#[tokio::test]
async fn test_session_survives_across_requests() {
    let app = test_app();
    let (_, first) = get_json(&app, "/api/dashboard").await;
    let (_, second) = get_json(&app, "/api/dashboard").await;

    // Misma sesión: mismos datos generados
    assert_eq!(first["session"]["session_id"], second["session"]["session_id"]);
    assert_eq!(first["kardex"], second["kardex"]);
}
