//! Utilidades del sistema
//!
//! Este módulo contiene el manejo de errores de la aplicación.

pub mod errors;
