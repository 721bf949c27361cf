//! Claves de cache deterministas
//!
//! La clave se deriva de `(operación, parámetros)`. Los parámetros se
//! serializan con las llaves ordenadas en todos los niveles, así dos mapas
//! iguales en contenido producen la misma clave sin importar el orden de
//! inserción.

use serde_json::{Map, Value};

/// Serialización canónica de un valor JSON
pub fn canonical_json(value: &Value) -> String {
    canonicalize(value).to_string()
}

fn canonicalize(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();
            let mut sorted = Map::new();
            for key in keys {
                sorted.insert(key.clone(), canonicalize(&map[key.as_str()]));
            }
            Value::Object(sorted)
        }
        Value::Array(items) => Value::Array(items.iter().map(canonicalize).collect()),
        other => other.clone(),
    }
}

/// Clave `"{operación}:{md5 de los parámetros}"`
pub fn cache_key(operation: &str, params: &Value) -> String {
    let canonical = canonical_json(params);
    format!("{}:{:x}", operation, md5::compute(canonical.as_bytes()))
}
