//! PostgreSQL persistence adapters using Diesel.
//!
//! Adapters only translate between domain types and Diesel rows; `models`
//! and `schema` stay private to this module. Connections come from a `bb8`
//! pool through `diesel-async`.
//!
//! ```ignore
//! use dashboard::outbound::persistence::{DbPool, DieselInvoiceRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/dashboard")).await?;
//! let repo = DieselInvoiceRepository::new(pool);
//! ```

mod diesel_error_mapping;
mod diesel_invoice_repository;
mod models;
mod pool;
mod schema;

pub use diesel_invoice_repository::DieselInvoiceRepository;
pub use pool::{DEFAULT_CONNECTION_TIMEOUT, DEFAULT_MAX_SIZE, DbPool, PoolConfig, PoolError};
