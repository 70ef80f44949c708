//! Outbound adapters implementing the driven domain ports.
//!
//! - **persistence**: PostgreSQL invoice store via Diesel.
//! - **cache**: per-path revalidation generations behind the path revalidator port.
//! - **credentials**: configured-account credential verifier.
//!
//! Adapters translate between domain types and infrastructure and hold no
//! business rules.

pub mod cache;
pub mod credentials;
pub mod persistence;
