//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum.

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::config::environment::EnvironmentConfig;
use crate::models::FleetSession;
use crate::services::FleetDataService;

/// Almacén de la sesión de flota activa
///
/// La sesión se genera de forma perezosa en el primer acceso y después
/// se reutiliza en cada request. No hay persistencia: reiniciar el
/// proceso regenera la flota desde cero.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<Option<FleetSession>>>,
}

impl SessionStore {
    /// Lee la sesión activa, generándola si todavía no existe
    pub async fn read<T>(&self, f: impl FnOnce(&FleetSession) -> T) -> T {
        {
            let guard = self.inner.read().await;
            if let Some(session) = guard.as_ref() {
                return f(session);
            }
        }

        let mut guard = self.inner.write().await;
        f(guard.get_or_insert_with(bootstrap_session))
    }

    /// Muta la sesión activa bajo el candado de escritura
    pub async fn write<T>(&self, f: impl FnOnce(&mut FleetSession) -> T) -> T {
        let mut guard = self.inner.write().await;
        f(guard.get_or_insert_with(bootstrap_session))
    }
}

fn bootstrap_session() -> FleetSession {
    let session = FleetDataService::generate_session();
    tracing::info!(
        session_id = %session.session_id,
        vehicles = session.vehicles.len(),
        equipment = session.equipment.len(),
        spare_parts = session.spare_parts.len(),
        "🚚 Sesión de flota generada"
    );
    session
}

#[derive(Clone)]
pub struct AppState {
    pub config: EnvironmentConfig,
    pub sessions: SessionStore,
}

impl AppState {
    pub fn new(config: EnvironmentConfig) -> Self {
        Self {
            config,
            sessions: SessionStore::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_session_is_generated_once() {
        let store = SessionStore::default();

        let first = store.read(|s| s.session_id).await;
        let second = store.read(|s| s.session_id).await;

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_mutations_survive_rereads() {
        let store = SessionStore::default();

        let initial_stock = store.read(|s| s.spare_parts[0].stock).await;
        store.write(|s| s.spare_parts[0].stock -= 1).await;
        let after = store.read(|s| s.spare_parts[0].stock).await;

        assert_eq!(after, initial_stock - 1);
    }
}
