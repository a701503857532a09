//! Configuración del proyecto
//!
//! Este módulo contiene las variables de entorno y la configuración
//! del servidor del tablero.

pub mod environment;

pub use environment::*;
