//! Recording test doubles for driven ports.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use dashboard::domain::ports::{InvoiceRepository, InvoiceRepositoryError};
use dashboard::domain::{InvoiceChanges, InvoiceId, NewInvoice};
use uuid::Uuid;

/// Call received by [`RecordingInvoiceRepository`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepositoryCall {
    Insert(NewInvoice),
    Update(InvoiceId, InvoiceChanges),
    Delete(InvoiceId),
}

/// Invoice repository that records calls and answers with a canned result.
#[derive(Clone, Default)]
pub struct RecordingInvoiceRepository {
    calls: Arc<Mutex<Vec<RepositoryCall>>>,
    failure: Option<InvoiceRepositoryError>,
}

impl RecordingInvoiceRepository {
    /// Repository whose writes succeed.
    pub fn succeeding() -> Self {
        Self::default()
    }

    /// Repository whose writes fail with `failure`.
    pub fn failing(failure: InvoiceRepositoryError) -> Self {
        Self {
            failure: Some(failure),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<RepositoryCall> {
        self.calls.lock().expect("calls lock").clone()
    }

    fn record(&self, call: RepositoryCall) -> Result<(), InvoiceRepositoryError> {
        self.calls.lock().expect("calls lock").push(call);
        match &self.failure {
            Some(failure) => Err(failure.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl InvoiceRepository for RecordingInvoiceRepository {
    async fn insert(&self, invoice: &NewInvoice) -> Result<InvoiceId, InvoiceRepositoryError> {
        self.record(RepositoryCall::Insert(invoice.clone()))?;
        Ok(InvoiceId::from_uuid(Uuid::new_v4()))
    }

    async fn update(
        &self,
        id: &InvoiceId,
        changes: &InvoiceChanges,
    ) -> Result<(), InvoiceRepositoryError> {
        self.record(RepositoryCall::Update(*id, changes.clone()))
    }

    async fn delete(&self, id: &InvoiceId) -> Result<(), InvoiceRepositoryError> {
        self.record(RepositoryCall::Delete(*id))
    }
}
