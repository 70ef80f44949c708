//! Port for invoice persistence.
//!
//! Each action performs at most one write through this port. The store
//! assigns identifiers and owns every record; callers cache nothing.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{InvoiceChanges, InvoiceId, NewInvoice};

use super::define_port_error;

define_port_error! {
    /// Errors raised by invoice repository adapters.
    pub enum InvoiceRepositoryError {
        /// No connection to the store could be obtained.
        Connection { message: String } =>
            "invoice repository connection failed: {message}",
        /// The statement was rejected or failed while executing.
        Query { message: String } =>
            "invoice repository query failed: {message}",
    }
}

/// Parameterised writes against the `invoices` table.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InvoiceRepository: Send + Sync {
    /// Insert a new invoice and return the identifier the store assigned.
    async fn insert(&self, invoice: &NewInvoice) -> Result<InvoiceId, InvoiceRepositoryError>;

    /// Overwrite customer, amount and status of the invoice with `id`.
    ///
    /// Date and identifier are left untouched. Updating an identifier that
    /// matches no row succeeds without effect.
    async fn update(
        &self,
        id: &InvoiceId,
        changes: &InvoiceChanges,
    ) -> Result<(), InvoiceRepositoryError>;

    /// Remove the invoice with `id`; a missing row is not an error.
    async fn delete(&self, id: &InvoiceId) -> Result<(), InvoiceRepositoryError>;
}

/// Repository used when no database is configured.
///
/// Accepts every write and forgets it; inserts return a fresh identifier.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureInvoiceRepository;

#[async_trait]
impl InvoiceRepository for FixtureInvoiceRepository {
    async fn insert(&self, _invoice: &NewInvoice) -> Result<InvoiceId, InvoiceRepositoryError> {
        Ok(InvoiceId::from_uuid(Uuid::new_v4()))
    }

    async fn update(
        &self,
        _id: &InvoiceId,
        _changes: &InvoiceChanges,
    ) -> Result<(), InvoiceRepositoryError> {
        Ok(())
    }

    async fn delete(&self, _id: &InvoiceId) -> Result<(), InvoiceRepositoryError> {
        Ok(())
    }
}
