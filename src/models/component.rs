//! Componentes de página

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::entity::{field, null_as_default, Audit, Entity, Flag};

/// Componente configurable de una página de la tienda
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Component {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_componente: Option<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub nombre: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tipo: String,
    /// Configuración libre en JSON serializado
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configuracion: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub orden: i32,
    #[serde(default)]
    pub activo: Flag,
    #[serde(flatten)]
    pub audit: Audit,
}

impl Entity for Component {
    type Key = i64;

    const FAMILY: &'static str = "component";
    const LABEL: &'static str = "componentes";
    const ENDPOINT_ID: i32 = 2;

    fn key(&self) -> Option<i64> {
        self.id_componente
    }

    fn key_fields(key: &i64) -> Map<String, Value> {
        field("id_componente", *key)
    }

    fn delete_fields(key: &i64) -> Map<String, Value> {
        field("id", *key)
    }
}
