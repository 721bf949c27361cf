//! Sistema de manejo de errores
//!
//! Este módulo define todos los tipos de errores del gateway y la regla
//! que decide qué mensaje llega al usuario final.

use thiserror::Error;

/// Mensaje genérico cuando el backend responde con error sin `mensaje`
pub const DEFAULT_BACKEND_MESSAGE: &str = "Error en la respuesta del servidor";

/// Errores principales del gateway
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GatewayError {
    #[error("No hay una sesión válida")]
    SessionMissing,

    #[error("No se encontró el endpoint {0} en el registro")]
    EndpointNotFound(i32),

    #[error("{0}")]
    Backend(String),

    #[error("{}", .message.as_deref().unwrap_or("Error de comunicación con el servidor"))]
    Transport {
        status: Option<u16>,
        message: Option<String>,
    },

    #[error("{0}")]
    Decode(String),

    #[error("Configuración inválida: {0}")]
    Config(String),
}

impl GatewayError {
    /// Aplicar la prioridad de mensajes en la frontera del gateway:
    /// mensaje del backend, luego mensaje del transporte, luego `fallback`.
    /// Los errores de decodificación nunca llegan tal cual al usuario.
    pub fn resolve(self, fallback: &str) -> Self {
        match self {
            GatewayError::Backend(message) if message.trim().is_empty() => {
                GatewayError::Backend(fallback.to_string())
            }
            GatewayError::Transport { status, message } => GatewayError::Transport {
                status,
                message: message
                    .filter(|m| !m.trim().is_empty())
                    .or_else(|| Some(fallback.to_string())),
            },
            GatewayError::Decode(detail) => {
                log::warn!("⚠️ Respuesta no decodificable: {}", detail);
                GatewayError::Decode(fallback.to_string())
            }
            other => other,
        }
    }

    /// Texto que se muestra directamente al usuario
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

impl From<serde_json::Error> for GatewayError {
    fn from(e: serde_json::Error) -> Self {
        GatewayError::Decode(format!("Respuesta inesperada: {}", e))
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type GatewayResult<T> = Result<T, GatewayError>;
