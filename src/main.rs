use anyhow::{anyhow, Result};
use dotenvy::dotenv;
use serde::Serialize;
use tracing::{error, info};

use backoffice_gateway::config::environment::EnvironmentConfig;
use backoffice_gateway::models::{ConceptDetailKey, Entity, Identity};
use backoffice_gateway::services::{EntityGateway, ListQuery};
use backoffice_gateway::state::AppState;

const USAGE: &str = "uso: backoffice-gateway <banners|componentes|conceptos|detalles|colecciones|detalles-coleccion|articulos> [id | clave:concepto]";

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    let config = EnvironmentConfig::from_env()?;

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(config.log_level())
        .init();

    info!("🛒 Backoffice gateway ({})", config.environment);

    let mut args = std::env::args().skip(1);
    let family = args.next().ok_or_else(|| anyhow!(USAGE))?;
    let id = args.next();

    let identity = identity_from_env()?;
    let state = AppState::from_config(config)?;

    let result = match family.as_str() {
        "banners" => run(&state.banners(), &identity, id.as_deref(), parse_id).await,
        "componentes" => run(&state.components(), &identity, id.as_deref(), parse_id).await,
        "conceptos" => run(&state.concepts(), &identity, id.as_deref(), parse_id).await,
        "detalles" => run(&state.concept_details(), &identity, id.as_deref(), parse_detail_key).await,
        "colecciones" => run(&state.collections(), &identity, id.as_deref(), parse_id).await,
        "detalles-coleccion" => {
            run(&state.collection_details(), &identity, id.as_deref(), parse_id).await
        }
        "articulos" => run(&state.items(), &identity, id.as_deref(), parse_id).await,
        _ => Err(anyhow!(USAGE)),
    };

    if let Err(e) = &result {
        error!("❌ {}", e);
    }
    result
}

/// Listar la familia o, con `id`, obtener un solo registro
async fn run<E: Entity>(
    gateway: &EntityGateway<E>,
    identity: &Identity,
    id: Option<&str>,
    parse_key: fn(&str) -> Result<E::Key>,
) -> Result<()> {
    match id {
        Some(raw) => {
            let key = parse_key(raw)?;
            let envelope = gateway.get_by_id(identity, &key).await?;
            print_json(&envelope)
        }
        None => {
            let envelope = gateway.list(identity, &ListQuery::new()).await?;
            info!("📊 {} {} recibidos", envelope.data.len(), E::LABEL);
            print_json(&envelope)
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn parse_id(raw: &str) -> Result<i64> {
    raw.parse().map_err(|_| anyhow!("ID inválido: {}", raw))
}

fn parse_detail_key(raw: &str) -> Result<ConceptDetailKey> {
    let (clave, concepto) = raw
        .split_once(':')
        .ok_or_else(|| anyhow!("se esperaba clave:concepto, llegó {}", raw))?;
    Ok(ConceptDetailKey::new(clave, concepto))
}

/// La sesión llega por entorno; no hay sesión de respaldo
fn identity_from_env() -> Result<Identity> {
    let usr = std::env::var("BACKOFFICE_USR").map_err(|_| anyhow!("BACKOFFICE_USR must be set"))?;
    let id_session = std::env::var("BACKOFFICE_ID_SESSION")
        .map_err(|_| anyhow!("BACKOFFICE_ID_SESSION must be set"))?
        .parse()
        .map_err(|_| anyhow!("BACKOFFICE_ID_SESSION must be a valid number"))?;

    let identity = Identity::new(usr, id_session);
    identity.ensure_valid()?;
    Ok(identity)
}
