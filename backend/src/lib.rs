//! Invoice dashboard backend.
//!
//! Domain services for the invoice form actions and sign-in live in
//! [`domain`]; actix handlers in [`inbound`]; adapters for PostgreSQL, the
//! cache revalidation and credential checks in [`outbound`].

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
