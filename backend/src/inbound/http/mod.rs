//! HTTP inbound adapter exposing the form actions.

pub mod action;
pub mod error;
pub mod health;
pub mod invoices;
pub mod login;
pub mod schemas;
pub mod session;
pub mod state;
#[cfg(test)]
pub mod test_utils;

pub use error::ApiResult;
