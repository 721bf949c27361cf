//! Identidad de sesión
//!
//! Cada operación del gateway recibe la identidad de forma explícita; no hay
//! un singleton de sesión leído por debajo.

use serde::{Deserialize, Serialize};
use std::sync::RwLock;

use crate::utils::errors::{GatewayError, GatewayResult};

/// Usuario y sesión que se inyectan en cada petición
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub usr: String,
    pub id_session: i64,
}

impl Identity {
    pub fn new(usr: impl Into<String>, id_session: i64) -> Self {
        Self {
            usr: usr.into(),
            id_session,
        }
    }

    /// Una identidad sin usuario o con `id_session <= 0` equivale a no tener sesión
    pub fn ensure_valid(&self) -> GatewayResult<()> {
        if self.usr.trim().is_empty() || self.id_session <= 0 {
            return Err(GatewayError::SessionMissing);
        }
        Ok(())
    }
}

/// Sesión tal como la entrega el proveedor de login (`usuario` en lugar de `usr`)
#[derive(Debug, Clone, Deserialize)]
pub struct SessionData {
    #[serde(alias = "usr")]
    pub usuario: String,
    pub id_session: i64,
}

impl From<SessionData> for Identity {
    fn from(session: SessionData) -> Self {
        Identity::new(session.usuario, session.id_session)
    }
}

/// Contenedor de la sesión actual, propiedad de quien lo crea
#[derive(Debug, Default)]
pub struct SessionStore {
    current: RwLock<Option<Identity>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_session(&self, identity: Identity) {
        if let Ok(mut current) = self.current.write() {
            *current = Some(identity);
        }
    }

    pub fn session(&self) -> Option<Identity> {
        self.current.read().ok().and_then(|current| current.clone())
    }

    pub fn clear(&self) {
        if let Ok(mut current) = self.current.write() {
            *current = None;
        }
    }

    /// Sesión válida o `SessionMissing`; nunca se sintetiza una sesión temporal
    pub fn require(&self) -> GatewayResult<Identity> {
        let identity = self.session().ok_or(GatewayError::SessionMissing)?;
        identity.ensure_valid()?;
        Ok(identity)
    }
}
