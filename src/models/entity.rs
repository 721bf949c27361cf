//! Contrato común de las entidades administrables
//!
//! Todas las familias (banners, componentes, conceptos...) comparten la misma
//! forma: registro plano con llave primaria, campos escalares, banderas 0/1 y
//! campos de auditoría opcionales.

use serde::de::{self, DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt::Debug;

/// Entidad manejada por un `EntityGateway`
pub trait Entity: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Llave primaria (simple o compuesta)
    type Key: Clone + PartialEq + Debug + Send + Sync;

    /// Nombre de la familia, usado en logs y claves de caché
    const FAMILY: &'static str;

    /// Nombre en plural para los mensajes al usuario
    const LABEL: &'static str;

    /// ID del endpoint en el registro
    const ENDPOINT_ID: i32;

    /// Llave del registro; `None` en registros aún no creados
    fn key(&self) -> Option<Self::Key>;

    /// Campos de filtro que identifican un registro en un `SL`
    fn key_fields(key: &Self::Key) -> Map<String, Value>;

    /// Campos que identifican el registro en un `DL`
    fn delete_fields(key: &Self::Key) -> Map<String, Value> {
        Self::key_fields(key)
    }
}

/// Mapa de un solo campo
pub fn field(name: &str, value: impl Into<Value>) -> Map<String, Value> {
    let mut fields = Map::new();
    fields.insert(name.to_string(), value.into());
    fields
}

/// Un `null` del backend se lee como el valor por defecto del campo
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Bandera booleana que viaja como 0/1
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Flag(pub bool);

impl Flag {
    pub fn is_set(self) -> bool {
        self.0
    }
}

impl From<bool> for Flag {
    fn from(value: bool) -> Self {
        Flag(value)
    }
}

impl Serialize for Flag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(u8::from(self.0))
    }
}

impl<'de> Deserialize<'de> for Flag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        match &value {
            Value::Bool(b) => Ok(Flag(*b)),
            Value::Null => Ok(Flag(false)),
            Value::Number(n) => match n.as_i64() {
                Some(0) => Ok(Flag(false)),
                Some(1) => Ok(Flag(true)),
                _ => Err(de::Error::custom(format!("bandera inválida: {}", value))),
            },
            Value::String(s) => match s.trim() {
                "0" | "false" => Ok(Flag(false)),
                "1" | "true" => Ok(Flag(true)),
                _ => Err(de::Error::custom(format!("bandera inválida: {}", value))),
            },
            _ => Err(de::Error::custom(format!("bandera inválida: {}", value))),
        }
    }
}

/// Campos de auditoría que agrega el backend
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Audit {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usr_a: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usr_m: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fecha_a: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fecha_m: Option<String>,
}
