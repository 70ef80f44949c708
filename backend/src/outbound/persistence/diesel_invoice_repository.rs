//! PostgreSQL-backed [`InvoiceRepository`] using Diesel.
//!
//! Every method issues one parameterised statement. Customer references are
//! UUID columns; a reference that is not a UUID is refused here with the
//! same message PostgreSQL would give, so the action shows it as a database
//! error.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;
use uuid::Uuid;

use crate::domain::ports::{InvoiceRepository, InvoiceRepositoryError};
use crate::domain::{CustomerId, InvoiceChanges, InvoiceId, NewInvoice};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{InvoiceUpdate, NewInvoiceRow};
use super::pool::{DbPool, PoolError};
use super::schema::invoices;

/// Diesel implementation of the invoice store.
#[derive(Clone)]
pub struct DieselInvoiceRepository {
    pool: DbPool,
}

impl DieselInvoiceRepository {
    /// Create a repository drawing connections from `pool`.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn pool_error(error: PoolError) -> InvoiceRepositoryError {
    map_pool_error(error, InvoiceRepositoryError::connection)
}

fn diesel_error(error: diesel::result::Error) -> InvoiceRepositoryError {
    map_diesel_error(
        error,
        InvoiceRepositoryError::query,
        InvoiceRepositoryError::connection,
    )
}

fn customer_uuid(customer_id: &CustomerId) -> Result<Uuid, InvoiceRepositoryError> {
    Uuid::parse_str(customer_id.as_ref()).map_err(|_| {
        InvoiceRepositoryError::query(format!(
            "invalid input syntax for type uuid: \"{customer_id}\""
        ))
    })
}

#[async_trait]
impl InvoiceRepository for DieselInvoiceRepository {
    async fn insert(&self, invoice: &NewInvoice) -> Result<InvoiceId, InvoiceRepositoryError> {
        let row = NewInvoiceRow {
            customer_id: customer_uuid(&invoice.customer_id)?,
            amount: invoice.amount.cents(),
            status: invoice.status.as_str(),
            date: invoice.date,
        };
        let mut conn = self.pool.get().await.map_err(pool_error)?;

        let id: Uuid = diesel::insert_into(invoices::table)
            .values(&row)
            .returning(invoices::id)
            .get_result(&mut conn)
            .await
            .map_err(diesel_error)?;
        Ok(InvoiceId::from_uuid(id))
    }

    async fn update(
        &self,
        id: &InvoiceId,
        changes: &InvoiceChanges,
    ) -> Result<(), InvoiceRepositoryError> {
        let update = InvoiceUpdate {
            customer_id: customer_uuid(&changes.customer_id)?,
            amount: changes.amount.cents(),
            status: changes.status.as_str(),
        };
        let mut conn = self.pool.get().await.map_err(pool_error)?;

        let affected = diesel::update(invoices::table.find(*id.as_uuid()))
            .set(&update)
            .execute(&mut conn)
            .await
            .map_err(diesel_error)?;
        if affected == 0 {
            debug!(invoice_id = %id, "update matched no invoice");
        }
        Ok(())
    }

    async fn delete(&self, id: &InvoiceId) -> Result<(), InvoiceRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;

        let affected = diesel::delete(invoices::table.find(*id.as_uuid()))
            .execute(&mut conn)
            .await
            .map_err(diesel_error)?;
        if affected == 0 {
            debug!(invoice_id = %id, "delete matched no invoice");
        }
        Ok(())
    }
}
