//! Banners de la página principal

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::entity::{field, null_as_default, Audit, Entity, Flag};

/// Banner administrable
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Banner {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_banner: Option<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub titulo: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub imagen_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enlace: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub orden: i32,
    #[serde(default)]
    pub activo: Flag,
    #[serde(flatten)]
    pub audit: Audit,
}

impl Entity for Banner {
    type Key = i64;

    const FAMILY: &'static str = "banner";
    const LABEL: &'static str = "banners";
    const ENDPOINT_ID: i32 = 1;

    fn key(&self) -> Option<i64> {
        self.id_banner
    }

    fn key_fields(key: &i64) -> Map<String, Value> {
        field("id_banner", *key)
    }

    fn delete_fields(key: &i64) -> Map<String, Value> {
        field("id", *key)
    }
}
