//! Cliente HTTP del backend administrativo
//!
//! Implementa `Transport` sobre reqwest: POST con cuerpo JSON, errores HTTP
//! convertidos a `GatewayError::Transport` rescatando el mensaje del cuerpo
//! cuando el backend lo manda.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

use crate::clients::transport::Transport;
use crate::utils::errors::{GatewayError, GatewayResult};

/// Cliente HTTP compartido por todos los gateways
#[derive(Clone)]
pub struct BackofficeHttpClient {
    pub client: Client,
}

impl BackofficeHttpClient {
    /// Crear nuevo cliente HTTP con timeout configurable
    pub fn new(timeout: Duration) -> GatewayResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GatewayError::Config(format!("cliente HTTP: {}", e)))?;

        Ok(Self { client })
    }

    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

/// Mensaje legible dentro de un cuerpo de error, si lo hay
pub fn message_from_error_body(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    let candidate = match &value {
        Value::Array(items) => items.first()?,
        other => other,
    };

    ["mensaje", "message", "error"]
        .iter()
        .filter_map(|field| candidate.get(field).and_then(Value::as_str))
        .map(str::trim)
        .find(|m| !m.is_empty())
        .map(String::from)
}

/// Cuerpo de una respuesta 2xx; vacío (p. ej. 204 de un `DL`) equivale a `{}`
pub fn parse_success_body(text: &str) -> GatewayResult<Value> {
    if text.trim().is_empty() {
        return Ok(Value::Object(serde_json::Map::new()));
    }
    Ok(serde_json::from_str(text)?)
}

#[async_trait]
impl Transport for BackofficeHttpClient {
    async fn post(&self, url: &str, body: &Value) -> GatewayResult<Value> {
        log::debug!("🌐 POST {}", url);

        let response = self
            .client
            .post(url)
            .header("Accept", "application/json, text/plain, */*")
            .json(body)
            .send()
            .await
            .map_err(|e| {
                log::error!("❌ Error de red en {}: {}", url, e);
                GatewayError::Transport {
                    status: e.status().map(|s| s.as_u16()),
                    message: Some(e.to_string()),
                }
            })?;

        let status = response.status();
        log::debug!("📡 Respuesta {} desde {}", status, url);

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            log::error!("❌ HTTP {} en {}: {}", status, url, error_text);
            return Err(GatewayError::Transport {
                status: Some(status.as_u16()),
                message: message_from_error_body(&error_text),
            });
        }

        let text = response.text().await.map_err(|e| GatewayError::Transport {
            status: Some(status.as_u16()),
            message: Some(e.to_string()),
        })?;

        parse_success_body(&text)
    }
}
