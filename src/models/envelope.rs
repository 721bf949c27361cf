//! Envoltura de respuesta del backend
//!
//! El backend responde `{statuscode, mensaje, data}` o bien ese mismo objeto
//! dentro de un arreglo de un elemento. `RawReply` decodifica ambas formas una
//! sola vez en la frontera.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Respuesta normalizada que reciben los llamadores
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseEnvelope<T> {
    pub statuscode: i64,
    pub mensaje: String,
    pub data: T,
}

impl<T> ResponseEnvelope<T> {
    /// Sustituir `data` conservando estado y mensaje
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ResponseEnvelope<U> {
        ResponseEnvelope {
            statuscode: self.statuscode,
            mensaje: self.mensaje,
            data: f(self.data),
        }
    }

    pub fn is_success(&self) -> bool {
        self.statuscode == 200
    }
}

/// Envoltura tal como llega, sin defaults aplicados
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawEnvelope {
    #[serde(default)]
    pub statuscode: Option<Value>,
    #[serde(default)]
    pub mensaje: Option<String>,
    #[serde(default)]
    pub data: Option<Value>,
}

impl RawEnvelope {
    /// El backend a veces manda el código como cadena (`"200"`)
    pub fn status_code(&self) -> Option<i64> {
        match self.statuscode.as_ref()? {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

/// Las dos formas posibles de la respuesta
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawReply {
    Wrapped(Vec<RawEnvelope>),
    Direct(RawEnvelope),
}

impl RawReply {
    /// Envoltura a inspeccionar: el elemento 0 si viene envuelta
    pub fn into_first(self) -> Option<RawEnvelope> {
        match self {
            RawReply::Wrapped(items) => items.into_iter().next(),
            RawReply::Direct(envelope) => Some(envelope),
        }
    }
}

/// `data` por defecto cuando el backend no manda nada
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyDefault {
    /// `[]` para operaciones de listado
    List,
    /// `{}` para operaciones de una sola entidad
    Entity,
}

impl EmptyDefault {
    pub fn value(self) -> Value {
        match self {
            EmptyDefault::List => json!([]),
            EmptyDefault::Entity => json!({}),
        }
    }
}
