//! Services module
//!
//! Este módulo contiene el gateway genérico, la normalización de respuestas y
//! las variantes de lectura propias de cada familia.

pub mod banner_service;
pub mod collection_service;
pub mod component_service;
pub mod concept_service;
pub mod envelope_normalizer;
pub mod gateway;

pub use banner_service::BannerService;
pub use collection_service::{CollectionDetailService, CollectionService, ItemService};
pub use component_service::ComponentService;
pub use concept_service::{ConceptDetailService, ConceptService};
pub use envelope_normalizer::normalize;
pub use gateway::{ActionCode, EntityGateway, GatewayOptions, ListQuery, Pagination};
