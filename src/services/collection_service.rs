//! Servicios de colecciones, detalle de colección y artículos

use crate::models::{Collection, CollectionDetail, Identity, Item, ResponseEnvelope};
use crate::utils::errors::GatewayResult;

use super::gateway::{EntityGateway, ListQuery};

pub type CollectionService = EntityGateway<Collection>;

pub type CollectionDetailService = EntityGateway<CollectionDetail>;

pub type ItemService = EntityGateway<Item>;

impl EntityGateway<Collection> {
    pub async fn list_active(&self, identity: &Identity) -> GatewayResult<ResponseEnvelope<Vec<Collection>>> {
        let envelope = self.list(identity, &ListQuery::new().filter("activo", 1)).await?;
        Ok(envelope.map(|rows| rows.into_iter().filter(|c| c.activo.is_set()).collect()))
    }
}

impl EntityGateway<CollectionDetail> {
    /// Artículos asignados a una colección, en su orden de despliegue
    pub async fn list_by_collection(
        &self,
        identity: &Identity,
        id_coleccion: i64,
    ) -> GatewayResult<ResponseEnvelope<Vec<CollectionDetail>>> {
        let envelope = self
            .list(identity, &ListQuery::new().filter("id_coleccion", id_coleccion))
            .await?;
        Ok(envelope.map(|rows| {
            let mut rows: Vec<CollectionDetail> =
                rows.into_iter().filter(|d| d.id_coleccion == id_coleccion).collect();
            rows.sort_by_key(|d| d.orden);
            rows
        }))
    }
}

impl EntityGateway<Item> {
    /// Búsqueda por nombre; texto vacío lista todo
    pub async fn search(&self, identity: &Identity, texto: &str) -> GatewayResult<ResponseEnvelope<Vec<Item>>> {
        let texto = texto.trim();
        self.list(identity, &ListQuery::new().filter("nombre", texto)).await
    }
}
