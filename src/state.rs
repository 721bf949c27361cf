//! Estado compartido
//!
//! `AppState` agrupa el transporte, el registro de endpoints y la
//! configuración, y construye un gateway por familia.

use std::sync::Arc;
use tracing::info;

use crate::client::BackofficeHttpClient;
use crate::clients::{EndpointRegistry, RemoteEndpointRegistry, StaticEndpointRegistry, Transport};
use crate::config::environment::{EnvironmentConfig, RegistrySource};
use crate::models::entity::Entity;
use crate::services::gateway::{EntityGateway, GatewayOptions};
use crate::services::{
    BannerService, CollectionDetailService, CollectionService, ComponentService,
    ConceptDetailService, ConceptService, ItemService,
};
use crate::utils::errors::GatewayResult;

#[derive(Clone)]
pub struct AppState {
    pub config: EnvironmentConfig,
    pub transport: Arc<dyn Transport>,
    pub registry: Arc<dyn EndpointRegistry>,
}

impl AppState {
    /// Construir el estado con el cliente HTTP real
    pub fn from_config(config: EnvironmentConfig) -> GatewayResult<Self> {
        let http = BackofficeHttpClient::new(config.http_timeout)?;

        let registry: Arc<dyn EndpointRegistry> = match &config.registry {
            RegistrySource::Static(pairs) => {
                let registry = StaticEndpointRegistry::parse(pairs)?;
                info!("📋 Registro estático con {} endpoints", registry.len());
                Arc::new(registry)
            }
            RegistrySource::Remote(url) => {
                info!("📋 Registro remoto: {}", url);
                Arc::new(RemoteEndpointRegistry::new(http.client.clone(), url.clone()))
            }
        };

        Ok(Self::new(config, Arc::new(http), registry))
    }

    pub fn new(
        config: EnvironmentConfig,
        transport: Arc<dyn Transport>,
        registry: Arc<dyn EndpointRegistry>,
    ) -> Self {
        Self {
            config,
            transport,
            registry,
        }
    }

    /// Gateway de cualquier familia con el TTL que marque la configuración
    pub fn gateway<E: Entity>(&self) -> EntityGateway<E> {
        let options = GatewayOptions {
            cache_ttl: self.config.cache.ttl_for(E::FAMILY),
        };
        EntityGateway::new(self.transport.clone(), self.registry.clone(), options)
    }

    pub fn banners(&self) -> BannerService {
        self.gateway()
    }

    pub fn components(&self) -> ComponentService {
        self.gateway()
    }

    pub fn concepts(&self) -> ConceptService {
        self.gateway()
    }

    pub fn concept_details(&self) -> ConceptDetailService {
        self.gateway()
    }

    pub fn collections(&self) -> CollectionService {
        self.gateway()
    }

    pub fn collection_details(&self) -> CollectionDetailService {
        self.gateway()
    }

    pub fn items(&self) -> ItemService {
        self.gateway()
    }
}
