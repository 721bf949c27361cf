//! Catálogos genéricos: conceptos y su detalle
//!
//! Un concepto es una tabla de búsqueda (`clave` → `descripcion`); su detalle
//! son las filas hijas identificadas por la pareja `(clave, concepto)`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::entity::{field, null_as_default, Audit, Entity, Flag};

/// Catálogo clave/valor
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Concept {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_concepto: Option<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub clave: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub descripcion: String,
    #[serde(default)]
    pub activo: Flag,
    #[serde(flatten)]
    pub audit: Audit,
}

impl Entity for Concept {
    type Key = i64;

    const FAMILY: &'static str = "concept";
    const LABEL: &'static str = "conceptos";
    const ENDPOINT_ID: i32 = 3;

    fn key(&self) -> Option<i64> {
        self.id_concepto
    }

    fn key_fields(key: &i64) -> Map<String, Value> {
        field("id_concepto", *key)
    }

    fn delete_fields(key: &i64) -> Map<String, Value> {
        field("id", *key)
    }
}

/// Llave compuesta del detalle de concepto
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConceptDetailKey {
    pub clave: String,
    pub concepto: String,
}

impl ConceptDetailKey {
    pub fn new(clave: impl Into<String>, concepto: impl Into<String>) -> Self {
        Self {
            clave: clave.into(),
            concepto: concepto.into(),
        }
    }
}

/// Fila hija de un catálogo
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConceptDetail {
    /// Clave del catálogo padre
    #[serde(default, deserialize_with = "null_as_default")]
    pub clave: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub concepto: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub descripcion: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valor: Option<String>,
    #[serde(default)]
    pub activo: Flag,
    #[serde(flatten)]
    pub audit: Audit,
}

impl Entity for ConceptDetail {
    type Key = ConceptDetailKey;

    const FAMILY: &'static str = "concept_detail";
    const LABEL: &'static str = "detalles de concepto";
    const ENDPOINT_ID: i32 = 4;

    fn key(&self) -> Option<ConceptDetailKey> {
        if self.clave.is_empty() || self.concepto.is_empty() {
            return None;
        }
        Some(ConceptDetailKey::new(&self.clave, &self.concepto))
    }

    fn key_fields(key: &ConceptDetailKey) -> Map<String, Value> {
        let mut fields = field("clave", key.clave.as_str());
        fields.insert("concepto".to_string(), Value::from(key.concepto.as_str()));
        fields
    }
}
