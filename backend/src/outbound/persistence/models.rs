//! Diesel row structs. Internal to the persistence layer.

use chrono::NaiveDate;
use diesel::prelude::*;
use uuid::Uuid;

use super::schema::invoices;

/// Insertable row; `id` is left to the database default.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = invoices)]
pub(crate) struct NewInvoiceRow<'a> {
    pub customer_id: Uuid,
    pub amount: i32,
    pub status: &'a str,
    pub date: NaiveDate,
}

/// Changeset for the fields a form may edit.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = invoices)]
pub(crate) struct InvoiceUpdate<'a> {
    pub customer_id: Uuid,
    pub amount: i32,
    pub status: &'a str,
}
