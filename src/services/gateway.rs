//! Gateway genérico por familia de entidades
//!
//! Todas las familias siguen el mismo flujo: resolver el endpoint, armar el
//! cuerpo (código de acción + identidad + campos), hacer POST, normalizar la
//! envoltura y, para las lecturas, pasar por el cache de la familia.

use serde_json::{json, Map, Value};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

use crate::cache::{cache_key, CacheStats, TimeBoxedCache};
use crate::clients::{EndpointRegistry, Transport};
use crate::models::entity::Entity;
use crate::models::envelope::{EmptyDefault, ResponseEnvelope};
use crate::models::session::Identity;
use crate::services::envelope_normalizer::normalize;
use crate::utils::errors::{GatewayError, GatewayResult};

/// Código de operación que viaja en `action`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionCode {
    Select,
    Insert,
    Update,
    Delete,
}

impl ActionCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ActionCode::Select => "SL",
            ActionCode::Insert => "IN",
            ActionCode::Update => "UP",
            ActionCode::Delete => "DL",
        }
    }
}

/// Paginación del listado
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
}

/// Filtros y paginación de un `list`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListQuery {
    filters: Map<String, Value>,
    pagination: Option<Pagination>,
}

impl ListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_filters(filters: Map<String, Value>) -> Self {
        Self {
            filters,
            pagination: None,
        }
    }

    pub fn filter(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.filters.insert(name.to_string(), value.into());
        self
    }

    /// `None` equivale a un filtro no definido y nunca se envía
    pub fn filter_opt<V: Into<Value>>(self, name: &str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.filter(name, value),
            None => self,
        }
    }

    pub fn paginate(mut self, page: u32, limit: u32) -> Self {
        self.pagination = Some(Pagination { page, limit });
        self
    }

    pub fn pagination(&self) -> Option<Pagination> {
        self.pagination
    }

    /// Filtros que sí viajan: sin `null` ni cadenas vacías
    pub fn effective_filters(&self) -> Map<String, Value> {
        self.filters
            .iter()
            .filter(|(_, value)| !is_blank(value))
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect()
    }

    fn cache_params(&self) -> Value {
        json!({
            "filters": Value::Object(self.effective_filters()),
            "pagination": self.pagination.map(|p| json!({"page": p.page, "limit": p.limit})),
        })
    }
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

/// Opciones de construcción del gateway
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GatewayOptions {
    /// TTL del cache de lecturas; `None` desactiva el cache
    pub cache_ttl: Option<Duration>,
}

impl GatewayOptions {
    pub fn cached(ttl: Duration) -> Self {
        Self {
            cache_ttl: Some(ttl),
        }
    }
}

/// Gateway remoto de una familia de entidades
pub struct EntityGateway<E: Entity> {
    transport: Arc<dyn Transport>,
    registry: Arc<dyn EndpointRegistry>,
    cache: Option<Mutex<TimeBoxedCache<ResponseEnvelope<Vec<E>>>>>,
    /// Se incrementa en cada invalidación; una lectura en vuelo no escribe
    /// en cache si la generación cambió mientras esperaba
    generation: AtomicU64,
}

impl<E: Entity> EntityGateway<E> {
    pub fn new(
        transport: Arc<dyn Transport>,
        registry: Arc<dyn EndpointRegistry>,
        options: GatewayOptions,
    ) -> Self {
        Self {
            transport,
            registry,
            cache: options.cache_ttl.map(|ttl| Mutex::new(TimeBoxedCache::new(ttl))),
            generation: AtomicU64::new(0),
        }
    }

    pub fn family(&self) -> &'static str {
        E::FAMILY
    }

    /// Listar registros de la familia
    pub async fn list(
        &self,
        identity: &Identity,
        query: &ListQuery,
    ) -> GatewayResult<ResponseEnvelope<Vec<E>>> {
        self.fetch_rows(identity, query)
            .await
            .map_err(|e| e.resolve(&format!("Error al consultar {}", E::LABEL)))
    }

    /// Buscar un registro por llave; `data` es `None` si no existe
    pub async fn get_by_id(
        &self,
        identity: &Identity,
        key: &E::Key,
    ) -> GatewayResult<ResponseEnvelope<Option<E>>> {
        let query = ListQuery::from_filters(E::key_fields(key));
        let envelope = self
            .fetch_rows(identity, &query)
            .await
            .map_err(|e| e.resolve(&format!("Error al obtener el registro de {}", E::LABEL)))?;

        // El backend puede ignorar el filtro por llave
        Ok(envelope.map(|rows| rows.into_iter().find(|row| row.key().as_ref() == Some(key))))
    }

    /// Crear un registro
    pub async fn create(&self, identity: &Identity, entity: &E) -> GatewayResult<ResponseEnvelope<E>> {
        self.write(ActionCode::Insert, identity, entity)
            .await
            .map_err(|e| e.resolve(&format!("Error al crear el registro de {}", E::LABEL)))
    }

    /// Actualizar un registro
    pub async fn update(&self, identity: &Identity, entity: &E) -> GatewayResult<ResponseEnvelope<E>> {
        self.write(ActionCode::Update, identity, entity)
            .await
            .map_err(|e| e.resolve(&format!("Error al actualizar el registro de {}", E::LABEL)))
    }

    /// Eliminar un registro; `data` siempre es `{}`
    pub async fn delete(&self, identity: &Identity, key: &E::Key) -> GatewayResult<ResponseEnvelope<Value>> {
        self.remove(identity, key)
            .await
            .map_err(|e| e.resolve(&format!("Error al eliminar el registro de {}", E::LABEL)))
    }

    /// Validación de unicidad: `true` si algún registro cumple `matches`.
    /// Cualquier falla se degrada a `false`.
    pub(crate) async fn check_exists(
        &self,
        identity: &Identity,
        query: &ListQuery,
        matches: impl Fn(&E) -> bool,
    ) -> bool {
        match self.fetch_rows(identity, query).await {
            Ok(envelope) => envelope.data.iter().any(matches),
            Err(e) => {
                log::warn!("⚠️ Validación de {} falló, se asume false: {}", E::LABEL, e);
                false
            }
        }
    }

    /// Vaciar el cache de la familia
    pub async fn invalidate_cache(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        if let Some(cache) = &self.cache {
            cache.lock().await.invalidate(None);
            log::info!("🗑️ Cache de {} invalidado", E::LABEL);
        }
    }

    /// Estadísticas del cache; vacías si la familia no cachea
    pub async fn cache_stats(&self) -> CacheStats {
        match &self.cache {
            Some(cache) => cache.lock().await.stats(),
            None => CacheStats::default(),
        }
    }

    async fn fetch_rows(
        &self,
        identity: &Identity,
        query: &ListQuery,
    ) -> GatewayResult<ResponseEnvelope<Vec<E>>> {
        identity.ensure_valid()?;

        let key = cache_key(&format!("{}.list", E::FAMILY), &query.cache_params());
        if let Some(cache) = &self.cache {
            if let Some(hit) = cache.lock().await.get(&key) {
                log::debug!("📥 {} desde cache ({} filas)", E::LABEL, hit.data.len());
                return Ok(hit);
            }
        }

        let generation = self.generation.load(Ordering::SeqCst);
        let body = list_body(identity, query)?;
        let raw = self.send(body).await?;
        let envelope = normalize(raw, EmptyDefault::List)?;
        let rows = decode_rows::<E>(envelope.data)?;
        let envelope = ResponseEnvelope {
            statuscode: envelope.statuscode,
            mensaje: envelope.mensaje,
            data: rows,
        };

        log::info!("✅ {} {} obtenidos", envelope.data.len(), E::LABEL);

        if let Some(cache) = &self.cache {
            let mut cache = cache.lock().await;
            if self.generation.load(Ordering::SeqCst) == generation {
                cache.set(&key, envelope.clone());
            }
        }

        Ok(envelope)
    }

    async fn write(
        &self,
        action: ActionCode,
        identity: &Identity,
        entity: &E,
    ) -> GatewayResult<ResponseEnvelope<E>> {
        identity.ensure_valid()?;

        let body = entity_body(action, identity, entity)?;
        let raw = self.send(body).await?;
        let envelope = normalize(raw, EmptyDefault::Entity)?;

        // El backend ya aplicó el cambio aunque el eco no se pueda leer
        self.invalidate_cache().await;
        log::info!("💾 {} {} ({})", action.as_str(), E::LABEL, envelope.mensaje);

        let data = echo_or_decode(envelope.data, entity)?;

        Ok(ResponseEnvelope {
            statuscode: envelope.statuscode,
            mensaje: envelope.mensaje,
            data,
        })
    }

    async fn remove(&self, identity: &Identity, key: &E::Key) -> GatewayResult<ResponseEnvelope<Value>> {
        identity.ensure_valid()?;

        let body = delete_body::<E>(identity, key)?;
        let raw = self.send(body).await?;
        let envelope = normalize(raw, EmptyDefault::Entity)?;

        self.invalidate_cache().await;
        log::info!("🗑️ DL {} {:?}", E::LABEL, key);

        Ok(envelope.map(|_| json!({})))
    }

    async fn send(&self, body: Map<String, Value>) -> GatewayResult<Value> {
        self.registry.wait_for_endpoints().await?;
        let url = self
            .registry
            .endpoint_by_id(E::ENDPOINT_ID)
            .await
            .ok_or(GatewayError::EndpointNotFound(E::ENDPOINT_ID))?;

        self.transport.post(&url, &Value::Object(body)).await
    }
}

fn identity_fields(identity: &Identity) -> GatewayResult<Map<String, Value>> {
    as_object(serde_json::to_value(identity)?)
}

fn as_object(value: Value) -> GatewayResult<Map<String, Value>> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(GatewayError::Decode(format!("se esperaba un objeto: {}", other))),
    }
}

fn action_body(action: ActionCode) -> Map<String, Value> {
    let mut body = Map::new();
    body.insert("action".to_string(), Value::from(action.as_str()));
    body
}

/// `{action: "SL", ...sesión, ...paginación, ...filtros}`
pub fn list_body(identity: &Identity, query: &ListQuery) -> GatewayResult<Map<String, Value>> {
    let mut body = action_body(ActionCode::Select);
    body.extend(identity_fields(identity)?);
    if let Some(pagination) = query.pagination() {
        body.insert("page".to_string(), Value::from(pagination.page));
        body.insert("limit".to_string(), Value::from(pagination.limit));
    }
    body.extend(query.effective_filters());
    Ok(body)
}

/// `{action, ...campos, ...sesión}`
pub fn entity_body<E: Entity>(
    action: ActionCode,
    identity: &Identity,
    entity: &E,
) -> GatewayResult<Map<String, Value>> {
    let mut body = action_body(action);
    body.extend(as_object(serde_json::to_value(entity)?)?);
    body.extend(identity_fields(identity)?);
    Ok(body)
}

/// `{action: "DL", id, ...sesión}`
pub fn delete_body<E: Entity>(identity: &Identity, key: &E::Key) -> GatewayResult<Map<String, Value>> {
    let mut body = action_body(ActionCode::Delete);
    body.extend(E::delete_fields(key));
    body.extend(identity_fields(identity)?);
    Ok(body)
}

fn decode_rows<E: Entity>(data: Value) -> GatewayResult<Vec<E>> {
    match data {
        Value::Array(_) => Ok(serde_json::from_value(data)?),
        Value::Object(ref map) if map.is_empty() => Ok(Vec::new()),
        Value::Object(_) => Ok(vec![serde_json::from_value(data)?]),
        other => Err(GatewayError::Decode(format!("se esperaba una lista: {}", other))),
    }
}

/// Si el backend no devuelve el registro se regresa lo enviado
fn echo_or_decode<E: Entity>(data: Value, submitted: &E) -> GatewayResult<E> {
    match data {
        Value::Object(ref map) if map.is_empty() => Ok(submitted.clone()),
        Value::Object(_) => Ok(serde_json::from_value(data)?),
        Value::Array(items) => match items.into_iter().next() {
            Some(first) if first.is_object() => Ok(serde_json::from_value(first)?),
            _ => Ok(submitted.clone()),
        },
        _ => Ok(submitted.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::transport::MockTransport;
    use crate::clients::StaticEndpointRegistry;
    use crate::clients::endpoint_registry::MockEndpointRegistry;
    use crate::models::{Banner, Concept, ConceptDetail, ConceptDetailKey, Flag};

    fn admin() -> Identity {
        Identity::new("admin", 77)
    }

    fn registry() -> Arc<dyn EndpointRegistry> {
        Arc::new(
            StaticEndpointRegistry::default()
                .with_endpoint(1, "https://api.test/banner")
                .with_endpoint(4, "https://api.test/concepto-detalle"),
        )
    }

    fn banner(id: Option<i64>, titulo: &str) -> Banner {
        Banner {
            id_banner: id,
            titulo: titulo.to_string(),
            imagen_url: "https://cdn.test/b.png".to_string(),
            activo: Flag(true),
            ..Banner::default()
        }
    }

    #[test]
    fn list_body_omits_blank_filters() {
        let query = ListQuery::new()
            .filter("a", "")
            .filter("b", Value::Null)
            .filter_opt::<i64>("c", None)
            .filter("d", 5);
        let body = list_body(&admin(), &query).unwrap();

        assert_eq!(
            Value::Object(body),
            json!({"action": "SL", "usr": "admin", "id_session": 77, "d": 5})
        );
    }

    #[test]
    fn list_body_includes_pagination() {
        let body = list_body(&admin(), &ListQuery::new().paginate(2, 25)).unwrap();
        assert_eq!(body["page"], json!(2));
        assert_eq!(body["limit"], json!(25));
    }

    #[test]
    fn entity_body_session_overrides_fields() {
        let mut b = banner(Some(3), "Verano");
        b.audit.usr_a = Some("otro".to_string());
        let body = entity_body(ActionCode::Update, &admin(), &b).unwrap();

        assert_eq!(body["action"], json!("UP"));
        assert_eq!(body["id_banner"], json!(3));
        assert_eq!(body["activo"], json!(1));
        assert_eq!(body["usr"], json!("admin"));
        assert_eq!(body["usr_a"], json!("otro"));
    }

    #[test]
    fn delete_body_for_simple_and_composite_keys() {
        let body = delete_body::<Banner>(&admin(), &5).unwrap();
        assert_eq!(
            Value::Object(body),
            json!({"action": "DL", "id": 5, "usr": "admin", "id_session": 77})
        );

        let key = ConceptDetailKey::new("TALLAS", "CH");
        let body = delete_body::<ConceptDetail>(&admin(), &key).unwrap();
        assert_eq!(body["clave"], json!("TALLAS"));
        assert_eq!(body["concepto"], json!("CH"));
        assert!(body.get("id").is_none());
    }

    #[tokio::test]
    async fn list_unwraps_array_envelope() {
        let mut transport = MockTransport::new();
        transport
            .expect_post()
            .withf(|url: &str, body: &Value| url == "https://api.test/banner" && body["action"] == "SL")
            .times(1)
            .returning(|_, _| {
                Ok(json!([{"statuscode": 200, "mensaje": "OK", "data": [{"id_banner": 1, "titulo": "Hot Sale", "activo": 1}]}]))
            });

        let gateway: EntityGateway<Banner> =
            EntityGateway::new(Arc::new(transport), registry(), GatewayOptions::default());
        let envelope = gateway.list(&admin(), &ListQuery::new()).await.unwrap();

        assert_eq!(envelope.statuscode, 200);
        assert_eq!(envelope.mensaje, "OK");
        assert_eq!(envelope.data.len(), 1);
        assert_eq!(envelope.data[0].id_banner, Some(1));
        assert!(envelope.data[0].activo.is_set());
    }

    #[tokio::test]
    async fn get_by_id_filters_client_side() {
        let mut transport = MockTransport::new();
        transport.expect_post().returning(|_, body: &Value| {
            assert_eq!(body["id_banner"], json!(2));
            Ok(json!({"statuscode": 200, "data": [{"id_banner": 1}, {"id_banner": 2, "titulo": "Dos"}]}))
        });

        let gateway: EntityGateway<Banner> =
            EntityGateway::new(Arc::new(transport), registry(), GatewayOptions::default());

        let found = gateway.get_by_id(&admin(), &2).await.unwrap();
        assert_eq!(found.data.map(|b| b.titulo), Some("Dos".to_string()));

        let missing = gateway.get_by_id(&admin(), &9).await.unwrap();
        assert!(missing.data.is_none());
    }

    #[tokio::test]
    async fn create_echoes_submitted_entity() {
        let mut transport = MockTransport::new();
        transport
            .expect_post()
            .returning(|_, _| Ok(json!({"statuscode": 200, "mensaje": "Registro creado"})));

        let gateway: EntityGateway<Banner> =
            EntityGateway::new(Arc::new(transport), registry(), GatewayOptions::default());
        let submitted = banner(None, "Nuevo");
        let envelope = gateway.create(&admin(), &submitted).await.unwrap();

        assert_eq!(envelope.mensaje, "Registro creado");
        assert_eq!(envelope.data, submitted);
    }

    #[tokio::test]
    async fn update_decodes_returned_row() {
        let mut transport = MockTransport::new();
        transport.expect_post().returning(|_, _| {
            Ok(json!([{"statuscode": 200, "data": [{"id_banner": 4, "titulo": "Servidor", "fecha_m": "2024-05-01"}]}]))
        });

        let gateway: EntityGateway<Banner> =
            EntityGateway::new(Arc::new(transport), registry(), GatewayOptions::default());
        let envelope = gateway.update(&admin(), &banner(Some(4), "Local")).await.unwrap();

        assert_eq!(envelope.data.titulo, "Servidor");
        assert_eq!(envelope.data.audit.fecha_m.as_deref(), Some("2024-05-01"));
    }

    #[tokio::test]
    async fn transport_failure_without_message_uses_fallback() {
        let mut transport = MockTransport::new();
        transport.expect_post().returning(|_, _| {
            Err(GatewayError::Transport {
                status: Some(502),
                message: None,
            })
        });

        let gateway: EntityGateway<Banner> =
            EntityGateway::new(Arc::new(transport), registry(), GatewayOptions::default());
        let err = gateway.delete(&admin(), &1).await.unwrap_err();

        assert_eq!(err.user_message(), "Error al eliminar el registro de banners");
    }

    #[tokio::test]
    async fn missing_session_never_reaches_transport() {
        let mut transport = MockTransport::new();
        transport.expect_post().times(0);

        let gateway: EntityGateway<Banner> =
            EntityGateway::new(Arc::new(transport), registry(), GatewayOptions::default());
        let err = gateway
            .list(&Identity::new("", 0), &ListQuery::new())
            .await
            .unwrap_err();

        assert_eq!(err, GatewayError::SessionMissing);
    }

    #[tokio::test]
    async fn unknown_endpoint_is_reported() {
        let mut transport = MockTransport::new();
        transport.expect_post().times(0);

        let gateway: EntityGateway<Banner> = EntityGateway::new(
            Arc::new(transport),
            Arc::new(StaticEndpointRegistry::default()),
            GatewayOptions::default(),
        );
        let err = gateway.list(&admin(), &ListQuery::new()).await.unwrap_err();

        assert_eq!(err, GatewayError::EndpointNotFound(1));
    }

    #[tokio::test]
    async fn cached_list_skips_second_request() {
        let mut transport = MockTransport::new();
        transport
            .expect_post()
            .times(1)
            .returning(|_, _| Ok(json!({"statuscode": 200, "data": [{"id_banner": 1}]})));

        let gateway: EntityGateway<Banner> = EntityGateway::new(
            Arc::new(transport),
            registry(),
            GatewayOptions::cached(Duration::from_secs(300)),
        );

        let query = ListQuery::new().filter("activo", 1);
        let first = gateway.list(&admin(), &query).await.unwrap();
        let second = gateway.list(&admin(), &query).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(gateway.cache_stats().await.size, 1);
    }

    #[tokio::test]
    async fn undecodable_echo_reports_operation_fallback() {
        let mut transport = MockTransport::new();
        transport.expect_post().returning(|_, _| {
            Ok(json!({"statuscode": 200, "data": {"id_concepto": "1", "clave": "TALLAS"}}))
        });

        let gateway: EntityGateway<Concept> = EntityGateway::new(
            Arc::new(transport),
            Arc::new(StaticEndpointRegistry::default().with_endpoint(3, "https://api.test/concepto")),
            GatewayOptions::default(),
        );
        let concept = Concept {
            id_concepto: Some(1),
            clave: "TALLAS".to_string(),
            ..Concept::default()
        };
        let err = gateway.update(&admin(), &concept).await.unwrap_err();

        assert!(matches!(err, GatewayError::Decode(_)));
        assert_eq!(err.user_message(), "Error al actualizar el registro de conceptos");
    }

    #[tokio::test]
    async fn accepted_update_clears_cache_even_if_echo_fails() {
        let mut transport = MockTransport::new();
        let mut seq = mockall::Sequence::new();
        transport
            .expect_post()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| {
                Ok(json!({"statuscode": 200, "data": [{"id_concepto": 1, "clave": "TALLAS", "descripcion": "viejo"}]}))
            });
        transport
            .expect_post()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(json!({"statuscode": 200, "data": {"id_concepto": "no-es-numero"}})));
        transport
            .expect_post()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| {
                Ok(json!({"statuscode": 200, "data": [{"id_concepto": 1, "clave": "TALLAS", "descripcion": "nuevo"}]}))
            });

        let gateway: EntityGateway<Concept> = EntityGateway::new(
            Arc::new(transport),
            Arc::new(StaticEndpointRegistry::default().with_endpoint(3, "https://api.test/concepto")),
            GatewayOptions::cached(Duration::from_secs(300)),
        );

        let before = gateway.list(&admin(), &ListQuery::new()).await.unwrap();
        assert_eq!(before.data[0].descripcion, "viejo");

        let concept = Concept {
            id_concepto: Some(1),
            clave: "TALLAS".to_string(),
            descripcion: "nuevo".to_string(),
            ..Concept::default()
        };
        assert!(gateway.update(&admin(), &concept).await.is_err());
        assert_eq!(gateway.cache_stats().await.size, 0);

        let after = gateway.list(&admin(), &ListQuery::new()).await.unwrap();
        assert_eq!(after.data[0].descripcion, "nuevo");
    }

    #[tokio::test]
    async fn registry_load_failure_reaches_caller() {
        let mut transport = MockTransport::new();
        transport.expect_post().times(0);

        let mut registry = MockEndpointRegistry::new();
        registry.expect_wait_for_endpoints().times(1).returning(|| {
            Err(GatewayError::Transport {
                status: Some(503),
                message: None,
            })
        });
        registry.expect_endpoint_by_id().times(0);

        let gateway: EntityGateway<Banner> =
            EntityGateway::new(Arc::new(transport), Arc::new(registry), GatewayOptions::default());
        let err = gateway.list(&admin(), &ListQuery::new()).await.unwrap_err();

        assert_eq!(
            err,
            GatewayError::Transport {
                status: Some(503),
                message: Some("Error al consultar banners".to_string()),
            }
        );
    }

    #[tokio::test]
    async fn null_scalars_do_not_break_a_list() {
        let mut transport = MockTransport::new();
        transport.expect_post().returning(|_, _| {
            Ok(json!([{"statuscode": 200, "data": [
                {"id_concepto": 1, "clave": "TALLAS", "descripcion": null, "activo": null},
                {"id_concepto": 2, "clave": null, "descripcion": "Colores"}
            ]}]))
        });

        let gateway: EntityGateway<Concept> = EntityGateway::new(
            Arc::new(transport),
            Arc::new(StaticEndpointRegistry::default().with_endpoint(3, "https://api.test/concepto")),
            GatewayOptions::default(),
        );
        let envelope = gateway.list(&admin(), &ListQuery::new()).await.unwrap();

        assert_eq!(envelope.data.len(), 2);
        assert_eq!(envelope.data[0].descripcion, "");
        assert!(!envelope.data[0].activo.is_set());
        assert_eq!(envelope.data[1].clave, "");
    }

    #[test]
    fn decode_rows_accepts_single_object() {
        let rows: Vec<Banner> = decode_rows(json!({"id_banner": 8})).unwrap();
        assert_eq!(rows.len(), 1);

        let rows: Vec<Banner> = decode_rows(json!({})).unwrap();
        assert!(rows.is_empty());
    }
}
