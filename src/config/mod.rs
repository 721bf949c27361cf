//! Configuración del proyecto
//!
//! Este módulo contiene la configuración de endpoints, cache y cliente HTTP
//! leída de variables de entorno.

pub mod environment;

pub use environment::*;
