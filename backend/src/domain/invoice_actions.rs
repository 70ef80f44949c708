//! Invoice form actions: create, update and delete.
//!
//! Every action runs validate → persist → invalidate → redirect and performs
//! at most one write. Validation and persistence problems are rendered back
//! to the form; only delete surfaces store failures as [`Error`].

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::{error, info};

use crate::domain::ports::{
    InvoiceCommand, InvoiceRepository, InvoiceRepositoryError, PathRevalidator,
};
use crate::domain::{
    ActionOutcome, ActionState, Error, FormPayload, InvoiceId, NavigationPath, NewInvoice,
    validate_invoice_form,
};

/// Summary returned when the create form fails validation.
pub const CREATE_INVALID_MESSAGE: &str = "Missing Fields. Failed to Create Invoice.";
/// Summary returned when the edit form fails validation.
pub const UPDATE_INVALID_MESSAGE: &str = "Missing Fields. Failed to Update Invoices.";

/// Domain service implementing [`InvoiceCommand`].
pub struct InvoiceActionService<R: ?Sized, C: ?Sized> {
    repository: Arc<R>,
    revalidator: Arc<C>,
    clock: Arc<dyn Clock>,
}

impl<R: ?Sized, C: ?Sized> Clone for InvoiceActionService<R, C> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            revalidator: Arc::clone(&self.revalidator),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<R: ?Sized, C: ?Sized> InvoiceActionService<R, C> {
    /// Create a service writing through `repository` and invalidating
    /// renderings through `revalidator`. `clock` supplies creation dates.
    pub fn new(repository: Arc<R>, revalidator: Arc<C>, clock: Arc<dyn Clock>) -> Self {
        Self {
            repository,
            revalidator,
            clock,
        }
    }
}

impl<R, C> InvoiceActionService<R, C>
where
    R: InvoiceRepository + ?Sized,
    C: PathRevalidator + ?Sized,
{
    /// Invalidate the listing and send the caller back to it.
    fn revalidate_and_redirect(&self) -> ActionOutcome {
        let listing = NavigationPath::invoices();
        self.revalidator.revalidate_path(&listing);
        ActionOutcome::Redirect(listing)
    }

    fn persistence_failure(action: &'static str, err: &InvoiceRepositoryError) -> ActionOutcome {
        error!(action, error = %err, "invoice write failed");
        ActionOutcome::Render(ActionState::with_message(format!("Database Error: {err}")))
    }

    fn map_delete_error(err: InvoiceRepositoryError) -> Error {
        match err {
            InvoiceRepositoryError::Connection { message } => {
                Error::service_unavailable(format!("invoice repository unavailable: {message}"))
            }
            InvoiceRepositoryError::Query { message } => {
                Error::internal(format!("invoice repository error: {message}"))
            }
        }
    }
}

#[async_trait]
impl<R, C> InvoiceCommand for InvoiceActionService<R, C>
where
    R: InvoiceRepository + ?Sized,
    C: PathRevalidator + ?Sized,
{
    async fn create_invoice(&self, form: &FormPayload) -> ActionOutcome {
        let changes = match validate_invoice_form(form) {
            Ok(changes) => changes,
            Err(errors) => {
                return ActionOutcome::Render(ActionState::invalid(errors, CREATE_INVALID_MESSAGE));
            }
        };

        let invoice = NewInvoice::dated(changes, self.clock.utc().date_naive());
        match self.repository.insert(&invoice).await {
            Ok(id) => {
                info!(invoice_id = %id, date = %invoice.formatted_date(), "invoice created");
                self.revalidate_and_redirect()
            }
            Err(err) => Self::persistence_failure("create", &err),
        }
    }

    async fn update_invoice(&self, id: &InvoiceId, form: &FormPayload) -> ActionOutcome {
        let changes = match validate_invoice_form(form) {
            Ok(changes) => changes,
            Err(errors) => {
                return ActionOutcome::Render(ActionState::invalid(errors, UPDATE_INVALID_MESSAGE));
            }
        };

        match self.repository.update(id, &changes).await {
            Ok(()) => {
                info!(invoice_id = %id, "invoice updated");
                self.revalidate_and_redirect()
            }
            Err(err) => Self::persistence_failure("update", &err),
        }
    }

    async fn delete_invoice(&self, id: &InvoiceId) -> Result<(), Error> {
        self.repository
            .delete(id)
            .await
            .map_err(Self::map_delete_error)?;
        info!(invoice_id = %id, "invoice deleted");
        self.revalidator.revalidate_path(&NavigationPath::invoices());
        Ok(())
    }
}

#[cfg(test)]
#[path = "invoice_actions_tests.rs"]
mod tests;
