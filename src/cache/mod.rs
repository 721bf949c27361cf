//! Cache
//!
//! Este módulo contiene el cache en memoria con expiración por entrada y la
//! derivación de claves.

pub mod cache_config;
pub mod cache_key;
pub mod time_boxed_cache;

pub use cache_config::CacheConfig;
pub use cache_key::cache_key;
pub use time_boxed_cache::{CacheEntry, CacheStats, TimeBoxedCache};
