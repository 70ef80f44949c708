//! OpenAPI document for the dashboard actions.
//!
//! Registers the invoice and session handlers, the health probes and the
//! schemas they reference. Swagger UI serves it in debug builds and the
//! `openapi-dump` binary writes it to stdout.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::domain::{ActionState, Error, ErrorCode, FieldErrors, InvoiceStatus};
use crate::inbound::http::schemas::{InvoiceFormSchema, LoginFormSchema};

/// Name of the session cookie security scheme.
pub const SESSION_COOKIE_SCHEME: &str = "SessionCookie";

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            SESSION_COOKIE_SCHEME,
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "session",
                "Session cookie issued by POST /api/v1/login.",
            ))),
        );
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Invoice dashboard API",
        description = "Form actions for creating, editing and deleting invoices, plus sign-in."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("SessionCookie" = [])),
    paths(
        crate::inbound::http::invoices::create_invoice,
        crate::inbound::http::invoices::update_invoice,
        crate::inbound::http::invoices::delete_invoice,
        crate::inbound::http::login::login,
        crate::inbound::http::login::logout,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ActionState,
        FieldErrors,
        Error,
        ErrorCode,
        InvoiceStatus,
        InvoiceFormSchema,
        LoginFormSchema
    )),
    tags(
        (name = "invoices", description = "Invoice form actions"),
        (name = "session", description = "Sign-in and sign-out"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
