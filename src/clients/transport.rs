//! Transporte HTTP genérico

use async_trait::async_trait;
use serde_json::Value;

use crate::utils::errors::GatewayResult;

/// Envía un cuerpo JSON por POST y devuelve la respuesta cruda
///
/// Las respuestas no-2xx deben reportarse como `GatewayError::Transport`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    async fn post(&self, url: &str, body: &Value) -> GatewayResult<Value>;
}
