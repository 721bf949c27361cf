//! Cache en memoria con expiración por entrada
//!
//! Evita lecturas repetidas de catálogos que casi no cambian. La expiración
//! es perezosa: una entrada vencida se elimina cuando se lee, no hay barrido
//! en segundo plano.

use std::collections::HashMap;
use std::time::Duration;
use tracing::debug;

use super::cache_config::{CacheOperation, DEFAULT_CACHE_TTL_SECS};

/// Datos en cache con sus marcas de tiempo (epoch en milisegundos)
#[derive(Debug, Clone, PartialEq)]
pub struct CacheEntry<T> {
    pub data: T,
    pub timestamp: i64,
    pub expires_at: i64,
}

impl<T> CacheEntry<T> {
    /// Vigente mientras `now <= expires_at`
    pub fn is_valid_at(&self, now: i64) -> bool {
        now <= self.expires_at
    }
}

/// Estadísticas del cache
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CacheStats {
    pub size: usize,
    pub keys: Vec<String>,
}

/// Cache clave → valor con TTL fijo
///
/// Pensado para un solo dueño; si se comparte entre tareas la sincronización
/// corre por cuenta de quien lo envuelve.
#[derive(Debug)]
pub struct TimeBoxedCache<T> {
    entries: HashMap<String, CacheEntry<T>>,
    ttl: Duration,
}

impl<T: Clone> Default for TimeBoxedCache<T> {
    fn default() -> Self {
        Self::new(Duration::from_secs(DEFAULT_CACHE_TTL_SECS))
    }
}

impl<T: Clone> TimeBoxedCache<T> {
    /// Crear nuevo cache con el TTL indicado
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Obtener un valor vigente
    pub fn get(&mut self, key: &str) -> Option<T> {
        self.get_at(key, now_millis())
    }

    /// Guardar un valor con vencimiento `now + ttl`
    pub fn set(&mut self, key: &str, data: T) {
        self.set_at(key, data, now_millis());
    }

    /// `get` con reloj explícito
    pub fn get_at(&mut self, key: &str, now: i64) -> Option<T> {
        let valid = match self.entries.get(key) {
            Some(entry) => entry.is_valid_at(now),
            None => {
                debug!("❌ Cache {} MISS para clave: {}", CacheOperation::Get.as_str(), key);
                return None;
            }
        };

        if !valid {
            self.entries.remove(key);
            debug!("⏰ Cache {} EXPIRADO para clave: {}", CacheOperation::Get.as_str(), key);
            return None;
        }

        debug!("📥 Cache {} HIT para clave: {}", CacheOperation::Get.as_str(), key);
        self.entries.get(key).map(|entry| entry.data.clone())
    }

    /// `set` con reloj explícito
    pub fn set_at(&mut self, key: &str, data: T, now: i64) {
        let ttl_ms = i64::try_from(self.ttl.as_millis()).unwrap_or(i64::MAX);
        let entry = CacheEntry {
            data,
            timestamp: now,
            expires_at: now.saturating_add(ttl_ms),
        };
        self.entries.insert(key.to_string(), entry);
        debug!(
            "💾 Cache {} para clave: {} (TTL: {}ms)",
            CacheOperation::Set.as_str(),
            key,
            ttl_ms
        );
    }

    /// Eliminar una entrada, o todas si `key` es `None`
    pub fn invalidate(&mut self, key: Option<&str>) {
        match key {
            Some(key) => {
                self.entries.remove(key);
                debug!("🗑️ Cache {} clave: {}", CacheOperation::Invalidate.as_str(), key);
            }
            None => {
                let removed = self.entries.len();
                self.entries.clear();
                debug!(
                    "🗑️ Cache {} completo ({} entradas eliminadas)",
                    CacheOperation::Invalidate.as_str(),
                    removed
                );
            }
        }
    }

    /// Obtener estadísticas del cache
    pub fn stats(&self) -> CacheStats {
        let mut keys: Vec<String> = self.entries.keys().cloned().collect();
        keys.sort();
        CacheStats {
            size: self.entries.len(),
            keys,
        }
    }

    /// Entrada cruda, sin verificar vencimiento
    pub fn peek(&self, key: &str) -> Option<&CacheEntry<T>> {
        self.entries.get(key)
    }
}

/// Obtener timestamp actual en milisegundos
fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
