//! Gateway de datos del panel administrativo
//!
//! Cliente de las familias de entidades del backend (banners, componentes,
//! catálogos, colecciones): arma las peticiones `SL`/`IN`/`UP`/`DL`, normaliza
//! la envoltura de respuesta y cachea los catálogos por tiempo limitado.

pub mod cache;
pub mod client;
pub mod clients;
pub mod config;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

pub use models::{Entity, Identity, ResponseEnvelope};
pub use services::{EntityGateway, GatewayOptions, ListQuery};
pub use state::AppState;
pub use utils::errors::{GatewayError, GatewayResult};
