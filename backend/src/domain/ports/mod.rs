//! Domain ports for the hexagonal boundary.
//!
//! Driven ports ([`InvoiceRepository`], [`PathRevalidator`],
//! [`CredentialVerifier`]) are implemented in `outbound`. Driving ports
//! ([`InvoiceCommand`], [`AuthenticationCommand`]) are implemented by the
//! domain services and consumed by `inbound`.

mod macros;
pub(crate) use macros::define_port_error;

mod authentication_command;
mod credential_verifier;
mod invoice_command;
mod invoice_repository;
mod path_revalidator;

pub use authentication_command::AuthenticationCommand;
#[cfg(test)]
pub use authentication_command::MockAuthenticationCommand;
#[cfg(test)]
pub use credential_verifier::MockCredentialVerifier;
pub use credential_verifier::{CredentialVerifier, SignInError};
#[cfg(test)]
pub use invoice_command::MockInvoiceCommand;
pub use invoice_command::InvoiceCommand;
#[cfg(test)]
pub use invoice_repository::MockInvoiceRepository;
pub use invoice_repository::{FixtureInvoiceRepository, InvoiceRepository, InvoiceRepositoryError};
#[cfg(test)]
pub use path_revalidator::MockPathRevalidator;
pub use path_revalidator::PathRevalidator;
