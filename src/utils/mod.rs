//! Utilidades del sistema
//!
//! Este módulo contiene el manejo de errores compartido por todo el gateway.

pub mod errors;

pub use errors::*;
