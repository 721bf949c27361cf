//! Clients - colaboradores externos del gateway
//!
//! Este módulo define las costuras con el exterior: el transporte HTTP y el
//! registro de endpoints.

pub mod endpoint_registry;
pub mod transport;

pub use endpoint_registry::{
    EndpointEntry, EndpointRegistry, RemoteEndpointRegistry, StaticEndpointRegistry,
};
pub use transport::Transport;
