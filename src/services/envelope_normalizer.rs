//! Normalización de respuestas del backend
//!
//! Convierte la respuesta cruda (objeto suelto o arreglo con un objeto) en un
//! único `ResponseEnvelope`. Solo se inspecciona el elemento 0 cuando la
//! respuesta viene envuelta.

use serde_json::Value;

use crate::models::envelope::{EmptyDefault, RawEnvelope, RawReply, ResponseEnvelope};
use crate::utils::errors::{GatewayError, GatewayResult, DEFAULT_BACKEND_MESSAGE};

/// Código de éxito del backend
pub const SUCCESS_STATUS: i64 = 200;

/// Mensaje por defecto de una respuesta exitosa
pub const DEFAULT_OK_MESSAGE: &str = "OK";

/// Normalizar una respuesta cruda
///
/// Falla con `GatewayError::Backend` si `statuscode` viene y es distinto de 200.
pub fn normalize(raw: Value, empty: EmptyDefault) -> GatewayResult<ResponseEnvelope<Value>> {
    if !(raw.is_array() || raw.is_object()) {
        return Err(GatewayError::Decode(format!(
            "se esperaba objeto o arreglo, llegó {}",
            raw
        )));
    }

    let reply: RawReply = serde_json::from_value(raw)?;
    match reply.into_first() {
        Some(envelope) => from_raw(envelope, empty),
        None => Ok(default_envelope(empty)),
    }
}

/// Normalizar y decodificar `data` al tipo pedido
pub fn normalize_as<T: serde::de::DeserializeOwned>(
    raw: Value,
    empty: EmptyDefault,
) -> GatewayResult<ResponseEnvelope<T>> {
    let envelope = normalize(raw, empty)?;
    let data = serde_json::from_value(envelope.data)?;
    Ok(ResponseEnvelope {
        statuscode: envelope.statuscode,
        mensaje: envelope.mensaje,
        data,
    })
}

fn from_raw(envelope: RawEnvelope, empty: EmptyDefault) -> GatewayResult<ResponseEnvelope<Value>> {
    let statuscode = envelope.status_code();

    if let Some(code) = statuscode {
        if code != SUCCESS_STATUS {
            let message = envelope
                .mensaje
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_BACKEND_MESSAGE.to_string());
            return Err(GatewayError::Backend(message));
        }
    }

    Ok(ResponseEnvelope {
        statuscode: statuscode.unwrap_or(SUCCESS_STATUS),
        mensaje: envelope
            .mensaje
            .unwrap_or_else(|| DEFAULT_OK_MESSAGE.to_string()),
        data: match envelope.data {
            None | Some(Value::Null) => empty.value(),
            Some(data) => data,
        },
    })
}

fn default_envelope(empty: EmptyDefault) -> ResponseEnvelope<Value> {
    ResponseEnvelope {
        statuscode: SUCCESS_STATUS,
        mensaje: DEFAULT_OK_MESSAGE.to_string(),
        data: empty.value(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn wrapping_level_does_not_change_result() {
        let envelopes = [
            json!({"statuscode": 200, "mensaje": "OK", "data": [{"id_banner": 1}]}),
            json!({"statuscode": 200, "mensaje": "Consulta exitosa", "data": {"id_banner": 2}}),
            json!({"mensaje": "sin código"}),
            json!({}),
        ];

        for envelope in envelopes {
            let bare = normalize(envelope.clone(), EmptyDefault::List).unwrap();
            let wrapped = normalize(json!([envelope]), EmptyDefault::List).unwrap();
            assert_eq!(bare, wrapped);
        }
    }

    #[test]
    fn non_200_status_fails_with_backend_message() {
        for raw in [
            json!({"statuscode": 404, "mensaje": "Not found"}),
            json!([{"statuscode": 404, "mensaje": "Not found"}]),
            json!([{"statuscode": "404", "mensaje": "Not found", "data": []}]),
        ] {
            let err = normalize(raw, EmptyDefault::Entity).unwrap_err();
            assert_eq!(err, GatewayError::Backend("Not found".to_string()));
        }
    }

    #[test]
    fn non_200_without_message_uses_generic_text() {
        let err = normalize(json!({"statuscode": 500}), EmptyDefault::List).unwrap_err();
        assert_eq!(err.user_message(), DEFAULT_BACKEND_MESSAGE);
    }

    #[test]
    fn only_first_element_is_inspected() {
        let raw = json!([
            {"statuscode": 200, "mensaje": "OK", "data": [1]},
            {"statuscode": 500, "mensaje": "ignorado"}
        ]);
        let envelope = normalize(raw, EmptyDefault::List).unwrap();
        assert_eq!(envelope.data, json!([1]));
    }

    #[test]
    fn defaults_are_applied() {
        let list = normalize(json!({}), EmptyDefault::List).unwrap();
        assert_eq!(
            list,
            ResponseEnvelope {
                statuscode: 200,
                mensaje: "OK".to_string(),
                data: json!([]),
            }
        );

        let entity = normalize(json!({"statuscode": 200, "data": null}), EmptyDefault::Entity).unwrap();
        assert_eq!(entity.data, json!({}));
    }

    #[test]
    fn empty_array_yields_default_envelope() {
        let envelope = normalize(json!([]), EmptyDefault::List).unwrap();
        assert_eq!(envelope.statuscode, 200);
        assert_eq!(envelope.mensaje, "OK");
        assert_eq!(envelope.data, json!([]));
    }

    #[test]
    fn scalar_reply_is_a_decode_error() {
        assert!(matches!(
            normalize(json!("OK"), EmptyDefault::List),
            Err(GatewayError::Decode(_))
        ));
    }

    #[test]
    fn normalize_as_decodes_data() {
        let envelope: ResponseEnvelope<Vec<i64>> =
            normalize_as(json!([{"statuscode": 200, "data": [1, 2]}]), EmptyDefault::List).unwrap();
        assert_eq!(envelope.data, vec![1, 2]);
    }
}
