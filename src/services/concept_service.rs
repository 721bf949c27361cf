//! Servicios de catálogos: conceptos y detalle de conceptos
//!
//! Son las familias que se cachean por defecto. Los sondeos de unicidad
//! (`clave_exists`, `detail_exists`) nunca propagan errores: ante cualquier
//! falla responden `false`.

use crate::models::{Concept, ConceptDetail, ConceptDetailKey, Identity, ResponseEnvelope};
use crate::utils::errors::GatewayResult;

use super::gateway::{EntityGateway, ListQuery};

pub type ConceptService = EntityGateway<Concept>;

pub type ConceptDetailService = EntityGateway<ConceptDetail>;

impl EntityGateway<Concept> {
    /// ¿Ya existe un catálogo con esta clave?
    pub async fn clave_exists(&self, identity: &Identity, clave: &str) -> bool {
        let clave = clave.trim();
        if clave.is_empty() {
            return false;
        }
        let query = ListQuery::new().filter("clave", clave);
        self.check_exists(identity, &query, |c| c.clave.eq_ignore_ascii_case(clave))
            .await
    }
}

impl EntityGateway<ConceptDetail> {
    /// Filas hijas de un catálogo
    pub async fn list_by_concept(
        &self,
        identity: &Identity,
        clave: &str,
    ) -> GatewayResult<ResponseEnvelope<Vec<ConceptDetail>>> {
        let envelope = self.list(identity, &ListQuery::new().filter("clave", clave)).await?;
        Ok(envelope.map(|rows| rows.into_iter().filter(|d| d.clave == clave).collect()))
    }

    /// ¿Ya existe la pareja `(clave, concepto)`?
    pub async fn detail_exists(&self, identity: &Identity, key: &ConceptDetailKey) -> bool {
        if key.clave.trim().is_empty() || key.concepto.trim().is_empty() {
            return false;
        }
        let query = ListQuery::new().filter("clave", key.clave.as_str());
        self.check_exists(identity, &query, |d| {
            d.clave == key.clave && d.concepto.eq_ignore_ascii_case(&key.concepto)
        })
        .await
    }
}
