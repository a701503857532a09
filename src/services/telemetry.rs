//! Servicio de telemetría de cadena de frío
//!
//! Simula la lectura de temperatura de las cajas frigoríficas durante
//! las últimas 24 horas. Las muestras oscilan alrededor del setpoint de
//! congelado con ruido gaussiano leve.

use rand::Rng;

/// Cantidad de muestras del historial (una por hora)
pub const TELEMETRY_SAMPLES: usize = 24;

/// Setpoint de temperatura de las cajas frigoríficas en °C
pub const TARGET_TEMPERATURE_C: f64 = -18.0;

/// Desviación estándar del ruido de medición
const NOISE_STD_DEV: f64 = 0.4;

/// Servicio de telemetría simulada
pub struct TelemetryService;

impl TelemetryService {
    /// Genera la serie de temperaturas de las últimas 24 horas
    pub fn temperature_series() -> Vec<f64> {
        let mut rng = rand::thread_rng();

        (0..TELEMETRY_SAMPLES)
            .map(|_| TARGET_TEMPERATURE_C + NOISE_STD_DEV * standard_normal(&mut rng))
            .collect()
    }
}

/// Muestra normal estándar vía Box-Muller
fn standard_normal<R: Rng>(rng: &mut R) -> f64 {
    let u1: f64 = rng.gen::<f64>().max(1e-300);
    let u2: f64 = rng.gen();
    (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_length() {
        let series = TelemetryService::temperature_series();
        assert_eq!(series.len(), TELEMETRY_SAMPLES);
    }

    #[test]
    fn test_series_centered_on_setpoint() {
        let series = TelemetryService::temperature_series();

        let mean: f64 = series.iter().sum::<f64>() / series.len() as f64;
        assert!(
            (mean - TARGET_TEMPERATURE_C).abs() < 1.0,
            "media fuera de rango: {}",
            mean
        );

        // Con sigma 0.4, una muestra a más de 3 °C del setpoint es
        // prácticamente imposible (más de 7 desviaciones)
        for sample in &series {
            assert!((sample - TARGET_TEMPERATURE_C).abs() < 3.0);
        }
    }

    #[test]
    fn test_standard_normal_bounded() {
        let mut rng = rand::thread_rng();
        for _ in 0..1_000 {
            let z = standard_normal(&mut rng);
            assert!(z.is_finite());
            assert!(z.abs() < 40.0);
        }
    }
}
