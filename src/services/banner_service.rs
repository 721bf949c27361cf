//! Servicio de banners

use crate::models::{Banner, Flag, Identity, ResponseEnvelope};
use crate::utils::errors::GatewayResult;

use super::gateway::{EntityGateway, ListQuery};

pub type BannerService = EntityGateway<Banner>;

impl EntityGateway<Banner> {
    /// Banners visibles en la tienda
    pub async fn list_active(&self, identity: &Identity) -> GatewayResult<ResponseEnvelope<Vec<Banner>>> {
        let envelope = self.list(identity, &ListQuery::new().filter("activo", 1)).await?;
        Ok(envelope.map(|rows| rows.into_iter().filter(|b| b.activo.is_set()).collect()))
    }

    /// Cambiar la bandera `activo` de un banner (toggle de la tabla)
    ///
    /// Regresa la fila con el nuevo valor; si falla, quien llama conserva la
    /// fila original.
    pub async fn set_active(
        &self,
        identity: &Identity,
        banner: &Banner,
        active: bool,
    ) -> GatewayResult<ResponseEnvelope<Banner>> {
        let toggled = Banner {
            activo: Flag(active),
            ..banner.clone()
        };
        self.update(identity, &toggled).await
    }
}
