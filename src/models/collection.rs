//! Colecciones de productos, su detalle y los artículos

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::entity::{field, null_as_default, Audit, Entity, Flag};

/// Colección de productos (temporada, promoción...)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_coleccion: Option<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub nombre: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descripcion: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fecha_inicio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fecha_fin: Option<String>,
    #[serde(default)]
    pub activo: Flag,
    #[serde(flatten)]
    pub audit: Audit,
}

impl Entity for Collection {
    type Key = i64;

    const FAMILY: &'static str = "collection";
    const LABEL: &'static str = "colecciones";
    const ENDPOINT_ID: i32 = 5;

    fn key(&self) -> Option<i64> {
        self.id_coleccion
    }

    fn key_fields(key: &i64) -> Map<String, Value> {
        field("id_coleccion", *key)
    }

    fn delete_fields(key: &i64) -> Map<String, Value> {
        field("id", *key)
    }
}

/// Artículo asignado a una colección
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CollectionDetail {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_detalle: Option<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub id_coleccion: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub id_item: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub orden: i32,
    #[serde(flatten)]
    pub audit: Audit,
}

impl Entity for CollectionDetail {
    type Key = i64;

    const FAMILY: &'static str = "collection_detail";
    const LABEL: &'static str = "detalles de colección";
    const ENDPOINT_ID: i32 = 6;

    fn key(&self) -> Option<i64> {
        self.id_detalle
    }

    fn key_fields(key: &i64) -> Map<String, Value> {
        field("id_detalle", *key)
    }

    fn delete_fields(key: &i64) -> Map<String, Value> {
        field("id", *key)
    }
}

/// Artículo del catálogo de venta
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Item {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_item: Option<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sku: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub nombre: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precio: Option<f64>,
    #[serde(default)]
    pub activo: Flag,
    #[serde(flatten)]
    pub audit: Audit,
}

impl Entity for Item {
    type Key = i64;

    const FAMILY: &'static str = "item";
    const LABEL: &'static str = "artículos";
    const ENDPOINT_ID: i32 = 7;

    fn key(&self) -> Option<i64> {
        self.id_item
    }

    fn key_fields(key: &i64) -> Map<String, Value> {
        field("id_item", *key)
    }

    fn delete_fields(key: &i64) -> Map<String, Value> {
        field("id", *key)
    }
}
