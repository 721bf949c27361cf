//! Servicio de componentes de página

use crate::models::{Component, Identity, ResponseEnvelope};
use crate::utils::errors::GatewayResult;

use super::gateway::{EntityGateway, ListQuery};

pub type ComponentService = EntityGateway<Component>;

impl EntityGateway<Component> {
    pub async fn list_by_type(
        &self,
        identity: &Identity,
        tipo: &str,
    ) -> GatewayResult<ResponseEnvelope<Vec<Component>>> {
        let envelope = self.list(identity, &ListQuery::new().filter("tipo", tipo)).await?;
        if tipo.is_empty() {
            return Ok(envelope);
        }
        Ok(envelope.map(|rows| rows.into_iter().filter(|c| c.tipo == tipo).collect()))
    }
}
