//! Dashboard server entry-point: loads settings, wires adapters and serves
//! the form actions.

mod server;

use actix_web::cookie::SameSite;
use actix_web::web;
use color_eyre::eyre::{Result, WrapErr};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use dashboard::inbound::http::health::HealthState;
use dashboard::outbound::persistence::{DbPool, PoolConfig};
use server::{DashboardSettings, ServerConfig, create_server, load_session_key};

#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(err) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %err, "tracing init failed");
    }

    let settings = DashboardSettings::load().wrap_err("load dashboard settings")?;
    let key = load_session_key(
        &settings.session_key_file(),
        settings.allow_ephemeral_session_key,
    )?;
    let bind_addr = settings.bind_addr()?;

    let mut config = ServerConfig::new(key, settings.cookie_secure(), SameSite::Lax, bind_addr)
        .with_account(settings.account()?);

    if let Some(url) = settings.database_url() {
        let pool = DbPool::new(PoolConfig::new(url).with_max_size(settings.pool_max_size()))
            .await
            .wrap_err("build database pool")?;
        config = config.with_db_pool(pool);
    }

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config)?;
    info!(%bind_addr, "dashboard listening");
    server.await.wrap_err("run http server")
}
