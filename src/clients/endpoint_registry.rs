//! Registro de endpoints
//!
//! Traduce el ID entero de cada familia a la URL a la que se hace POST.

use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;
use tokio::sync::OnceCell;
use tracing::{info, warn};

use crate::models::envelope::EmptyDefault;
use crate::services::envelope_normalizer::normalize;
use crate::utils::errors::{GatewayError, GatewayResult};

/// Resuelve URLs por ID
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EndpointRegistry: Send + Sync {
    /// Esperar a que el registro esté cargado
    async fn wait_for_endpoints(&self) -> GatewayResult<()>;

    /// URL del endpoint, `None` si el ID no existe
    async fn endpoint_by_id(&self, id: i32) -> Option<String>;
}

/// Registro fijo, cargado desde configuración
#[derive(Debug, Clone, Default)]
pub struct StaticEndpointRegistry {
    endpoints: HashMap<i32, String>,
}

impl StaticEndpointRegistry {
    pub fn new(endpoints: HashMap<i32, String>) -> Self {
        Self { endpoints }
    }

    pub fn with_endpoint(mut self, id: i32, url: impl Into<String>) -> Self {
        self.endpoints.insert(id, url.into());
        self
    }

    /// Parsear `"1=https://a,2=https://b"`
    pub fn parse(pairs: &str) -> GatewayResult<Self> {
        let mut endpoints = HashMap::new();
        for pair in pairs.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let (id, url) = pair
                .split_once('=')
                .ok_or_else(|| GatewayError::Config(format!("endpoint sin '=': {}", pair)))?;
            let id: i32 = id
                .trim()
                .parse()
                .map_err(|_| GatewayError::Config(format!("ID de endpoint inválido: {}", id)))?;
            let url = url.trim();
            if url.is_empty() {
                return Err(GatewayError::Config(format!("endpoint {} sin URL", id)));
            }
            endpoints.insert(id, url.to_string());
        }
        Ok(Self { endpoints })
    }

    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }
}

#[async_trait]
impl EndpointRegistry for StaticEndpointRegistry {
    async fn wait_for_endpoints(&self) -> GatewayResult<()> {
        Ok(())
    }

    async fn endpoint_by_id(&self, id: i32) -> Option<String> {
        self.endpoints.get(&id).cloned()
    }
}

/// Fila del registro remoto
#[derive(Debug, Clone, Deserialize)]
pub struct EndpointEntry {
    #[serde(alias = "id_endpoint")]
    pub id: i32,
    #[serde(alias = "endpoint")]
    pub url: String,
}

/// Registro que se descarga una sola vez desde el backend
pub struct RemoteEndpointRegistry {
    client: reqwest::Client,
    registry_url: String,
    endpoints: OnceCell<HashMap<i32, String>>,
}

impl RemoteEndpointRegistry {
    pub fn new(client: reqwest::Client, registry_url: impl Into<String>) -> Self {
        Self {
            client,
            registry_url: registry_url.into(),
            endpoints: OnceCell::new(),
        }
    }

    async fn load(&self) -> GatewayResult<HashMap<i32, String>> {
        info!("🔗 Cargando registro de endpoints: {}", self.registry_url);

        let response = self
            .client
            .get(&self.registry_url)
            .send()
            .await
            .map_err(|e| GatewayError::Transport {
                status: e.status().map(|s| s.as_u16()),
                message: Some(e.to_string()),
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!("⚠️ Registro de endpoints respondió {}", status);
            return Err(GatewayError::Transport {
                status: Some(status.as_u16()),
                message: None,
            });
        }

        let raw: serde_json::Value = response
            .json()
            .await
            .map_err(|e| GatewayError::Decode(format!("Respuesta inesperada: {}", e)))?;

        // El registro puede venir suelto o dentro de la envoltura habitual
        let rows = if raw.is_array() && raw.get(0).map_or(false, |r| r.get("statuscode").is_none()) {
            raw
        } else {
            normalize(raw, EmptyDefault::List)?.data
        };

        let entries: Vec<EndpointEntry> = serde_json::from_value(rows)?;
        info!("✅ {} endpoints registrados", entries.len());

        Ok(entries.into_iter().map(|e| (e.id, e.url)).collect())
    }
}

#[async_trait]
impl EndpointRegistry for RemoteEndpointRegistry {
    async fn wait_for_endpoints(&self) -> GatewayResult<()> {
        self.endpoints.get_or_try_init(|| self.load()).await?;
        Ok(())
    }

    async fn endpoint_by_id(&self, id: i32) -> Option<String> {
        self.endpoints.get().and_then(|endpoints| endpoints.get(&id).cloned())
    }
}
