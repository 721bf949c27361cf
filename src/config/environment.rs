//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno y variables de configuración.

use std::collections::HashMap;
use std::time::Duration;

use crate::cache::cache_config::{CacheConfig, DEFAULT_CACHE_TTL_SECS};
use crate::utils::errors::{GatewayError, GatewayResult};

/// Timeout por defecto del cliente HTTP
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Origen del registro de endpoints
#[derive(Debug, Clone, PartialEq)]
pub enum RegistrySource {
    /// `BACKOFFICE_ENDPOINTS="1=https://...,2=https://..."`
    Static(String),
    /// `BACKOFFICE_REGISTRY_URL`
    Remote(String),
}

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub registry: RegistrySource,
    pub cache: CacheConfig,
    pub http_timeout: Duration,
}

impl EnvironmentConfig {
    /// Leer la configuración del proceso
    pub fn from_env() -> GatewayResult<Self> {
        let vars: HashMap<String, String> = std::env::vars().collect();
        Self::from_vars(&vars)
    }

    /// Leer la configuración desde un mapa de variables
    pub fn from_vars(vars: &HashMap<String, String>) -> GatewayResult<Self> {
        let get = |name: &str| {
            vars.get(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let registry = match (get("BACKOFFICE_REGISTRY_URL"), get("BACKOFFICE_ENDPOINTS")) {
            (Some(url), _) => RegistrySource::Remote(url),
            (None, Some(endpoints)) => RegistrySource::Static(endpoints),
            (None, None) => {
                return Err(GatewayError::Config(
                    "BACKOFFICE_REGISTRY_URL or BACKOFFICE_ENDPOINTS must be set".to_string(),
                ))
            }
        };

        let ttl_secs = parse_secs(get("BACKOFFICE_CACHE_TTL_SECS"), "BACKOFFICE_CACHE_TTL_SECS", DEFAULT_CACHE_TTL_SECS)?;
        let timeout_secs = parse_secs(
            get("BACKOFFICE_HTTP_TIMEOUT_SECS"),
            "BACKOFFICE_HTTP_TIMEOUT_SECS",
            DEFAULT_HTTP_TIMEOUT_SECS,
        )?;

        Ok(Self {
            environment: get("ENVIRONMENT").unwrap_or_else(|| "development".to_string()),
            registry,
            cache: CacheConfig {
                ttl: Duration::from_secs(ttl_secs),
                ..CacheConfig::default()
            },
            http_timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Verificar si estamos en modo producción
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Nivel de log por defecto según el entorno
    pub fn log_level(&self) -> tracing::Level {
        if self.is_development() {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        }
    }
}

fn parse_secs(value: Option<String>, name: &str, default: u64) -> GatewayResult<u64> {
    match value {
        Some(raw) => raw
            .parse()
            .map_err(|_| GatewayError::Config(format!("{} must be a valid number", name))),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn defaults_with_static_registry() {
        let config = EnvironmentConfig::from_vars(&vars(&[("BACKOFFICE_ENDPOINTS", "1=https://api.test")])).unwrap();

        assert!(config.is_development());
        assert_eq!(config.registry, RegistrySource::Static("1=https://api.test".to_string()));
        assert_eq!(config.cache.ttl, Duration::from_secs(300));
        assert_eq!(config.http_timeout, Duration::from_secs(30));
        assert_eq!(config.log_level(), tracing::Level::DEBUG);
    }

    #[test]
    fn remote_registry_takes_precedence() {
        let config = EnvironmentConfig::from_vars(&vars(&[
            ("ENVIRONMENT", "production"),
            ("BACKOFFICE_ENDPOINTS", "1=https://api.test"),
            ("BACKOFFICE_REGISTRY_URL", "https://api.test/endpoints"),
            ("BACKOFFICE_CACHE_TTL_SECS", "60"),
        ]))
        .unwrap();

        assert!(config.is_production());
        assert_eq!(config.registry, RegistrySource::Remote("https://api.test/endpoints".to_string()));
        assert_eq!(config.cache.ttl, Duration::from_secs(60));
    }

    #[test]
    fn invalid_values_are_config_errors() {
        assert!(matches!(
            EnvironmentConfig::from_vars(&vars(&[])),
            Err(GatewayError::Config(_))
        ));
        assert!(matches!(
            EnvironmentConfig::from_vars(&vars(&[
                ("BACKOFFICE_ENDPOINTS", "1=https://api.test"),
                ("BACKOFFICE_HTTP_TIMEOUT_SECS", "treinta"),
            ])),
            Err(GatewayError::Config(_))
        ));
    }
}
