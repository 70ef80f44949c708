//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data` and only see driving ports, so
//! they can be tested without a database or identity provider.

use std::sync::Arc;

use crate::domain::ports::{AuthenticationCommand, InvoiceCommand};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Invoice form actions.
    pub invoices: Arc<dyn InvoiceCommand>,
    /// Sign-in action.
    pub authentication: Arc<dyn AuthenticationCommand>,
}

impl HttpState {
    /// Bundle the driving ports.
    ///
    /// # Examples
    /// ```no_run
    /// use std::sync::Arc;
    ///
    /// use dashboard::domain::ports::FixtureInvoiceRepository;
    /// use dashboard::domain::{AuthenticationService, InvoiceActionService};
    /// use dashboard::inbound::http::state::HttpState;
    /// use dashboard::outbound::cache::InMemoryPathRevalidator;
    /// use dashboard::outbound::credentials::StaticCredentialVerifier;
    /// use mockable::DefaultClock;
    ///
    /// let invoices = InvoiceActionService::new(
    ///     Arc::new(FixtureInvoiceRepository),
    ///     Arc::new(InMemoryPathRevalidator::new()),
    ///     Arc::new(DefaultClock),
    /// );
    /// let authentication =
    ///     AuthenticationService::new(Arc::new(StaticCredentialVerifier::default()));
    /// let state = HttpState::new(Arc::new(invoices), Arc::new(authentication));
    /// let _invoices = state.invoices.clone();
    /// ```
    pub fn new(
        invoices: Arc<dyn InvoiceCommand>,
        authentication: Arc<dyn AuthenticationCommand>,
    ) -> Self {
        Self {
            invoices,
            authentication,
        }
    }
}
