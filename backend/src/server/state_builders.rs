//! Builders wiring domain services to their outbound adapters.

use std::sync::Arc;

use actix_web::web;
use mockable::DefaultClock;
use tracing::info;

use dashboard::domain::ports::{FixtureInvoiceRepository, InvoiceRepository};
use dashboard::domain::{AuthenticationService, InvoiceActionService};
use dashboard::inbound::http::state::HttpState;
use dashboard::outbound::cache::InMemoryPathRevalidator;
use dashboard::outbound::credentials::StaticCredentialVerifier;
use dashboard::outbound::persistence::DieselInvoiceRepository;

use super::ServerConfig;

fn build_invoice_repository(config: &ServerConfig) -> Arc<dyn InvoiceRepository> {
    match &config.db_pool {
        Some(pool) => Arc::new(DieselInvoiceRepository::new(pool.clone())),
        None => {
            info!("no database configured; invoice writes go to the fixture repository");
            Arc::new(FixtureInvoiceRepository)
        }
    }
}

/// Assemble the handler state from `config`.
pub fn build_http_state(
    config: &ServerConfig,
    revalidator: Arc<InMemoryPathRevalidator>,
) -> web::Data<HttpState> {
    let invoices = InvoiceActionService::new(
        build_invoice_repository(config),
        revalidator,
        Arc::new(DefaultClock),
    );
    let authentication =
        AuthenticationService::new(Arc::new(StaticCredentialVerifier::new(config.account.clone())));

    web::Data::new(HttpState::new(Arc::new(invoices), Arc::new(authentication)))
}
