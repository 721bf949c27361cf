//! Configuración de cache
//!
//! Este módulo contiene la configuración del cache en memoria de los gateways.

use std::collections::HashSet;
use std::time::Duration;

/// TTL por defecto: 5 minutos
pub const DEFAULT_CACHE_TTL_SECS: u64 = 300;

/// Configuración del cache
#[derive(Debug, Clone, PartialEq)]
pub struct CacheConfig {
    pub ttl: Duration,
    /// Familias cuyos listados se cachean
    pub cached_families: HashSet<String>,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(DEFAULT_CACHE_TTL_SECS),
            // Catálogos de baja rotación
            cached_families: ["concept", "concept_detail"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

impl CacheConfig {
    /// TTL a aplicar a una familia, `None` si no se cachea
    pub fn ttl_for(&self, family: &str) -> Option<Duration> {
        self.cached_families.contains(family).then_some(self.ttl)
    }
}

/// Operaciones de cache, usadas para etiquetar los logs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheOperation {
    Get,
    Set,
    Invalidate,
}

impl CacheOperation {
    pub fn as_str(self) -> &'static str {
        match self {
            CacheOperation::Get => "GET",
            CacheOperation::Set => "SET",
            CacheOperation::Invalidate => "INVALIDATE",
        }
    }
}
