//! Driving port for the invoice form actions.
//!
//! Inbound adapters call this port without knowing which repository or
//! render cache sits behind it, so HTTP handler tests can substitute a
//! double.

use async_trait::async_trait;

use crate::domain::{ActionOutcome, Error, FormPayload, InvoiceId};

/// Create, update and delete invoice actions.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InvoiceCommand: Send + Sync {
    /// Validate `form` and insert a new invoice.
    ///
    /// Never fails: validation and persistence problems come back as
    /// [`ActionOutcome::Render`].
    async fn create_invoice(&self, form: &FormPayload) -> ActionOutcome;

    /// Validate `form` and overwrite the invoice with `id`.
    async fn update_invoice(&self, id: &InvoiceId, form: &FormPayload) -> ActionOutcome;

    /// Delete the invoice with `id`. Store failures are returned to the
    /// caller.
    async fn delete_invoice(&self, id: &InvoiceId) -> Result<(), Error>;
}
