//! Invoice form action handlers.
//!
//! ```text
//! POST   /api/v1/invoices       customerId=…&amount=42.50&status=pending
//! POST   /api/v1/invoices/{id}  customerId=…&amount=42.50&status=paid
//! DELETE /api/v1/invoices/{id}
//! ```
//!
//! Failed forms answer `200` with an `ActionState` body; successful writes
//! answer `303 See Other` to the invoice listing.

use actix_web::{HttpResponse, delete, post, web};

use crate::domain::FormPayload;
use crate::inbound::http::ApiResult;
use crate::inbound::http::action::{outcome_response, parse_invoice_id};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Create an invoice from the submitted form.
#[utoipa::path(
    post,
    path = "/api/v1/invoices",
    request_body(
        content = crate::inbound::http::schemas::InvoiceFormSchema,
        content_type = "application/x-www-form-urlencoded"
    ),
    responses(
        (status = 200, description = "Form rejected", body = crate::domain::ActionState),
        (status = 303, description = "Invoice created", headers(("Location" = String, description = "Invoice listing"))),
        (status = 401, description = "Unauthorised", body = crate::domain::Error)
    ),
    tags = ["invoices"],
    operation_id = "createInvoice"
)]
#[post("/invoices")]
pub async fn create_invoice(
    state: web::Data<HttpState>,
    session: SessionContext,
    form: web::Form<FormPayload>,
) -> ApiResult<HttpResponse> {
    session.require_user_id()?;
    let outcome = state.invoices.create_invoice(&form).await;
    Ok(outcome_response(outcome))
}

/// Overwrite customer, amount and status of an invoice.
#[utoipa::path(
    post,
    path = "/api/v1/invoices/{id}",
    params(("id" = String, Path, description = "Invoice identifier (UUID)")),
    request_body(
        content = crate::inbound::http::schemas::InvoiceFormSchema,
        content_type = "application/x-www-form-urlencoded"
    ),
    responses(
        (status = 200, description = "Form rejected", body = crate::domain::ActionState),
        (status = 303, description = "Invoice updated", headers(("Location" = String, description = "Invoice listing"))),
        (status = 400, description = "Malformed identifier", body = crate::domain::Error),
        (status = 401, description = "Unauthorised", body = crate::domain::Error)
    ),
    tags = ["invoices"],
    operation_id = "updateInvoice"
)]
#[post("/invoices/{id}")]
pub async fn update_invoice(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
    form: web::Form<FormPayload>,
) -> ApiResult<HttpResponse> {
    session.require_user_id()?;
    let id = parse_invoice_id(&path)?;
    let outcome = state.invoices.update_invoice(&id, &form).await;
    Ok(outcome_response(outcome))
}

/// Delete an invoice. Deleting a missing invoice succeeds.
#[utoipa::path(
    delete,
    path = "/api/v1/invoices/{id}",
    params(("id" = String, Path, description = "Invoice identifier (UUID)")),
    responses(
        (status = 204, description = "Invoice deleted"),
        (status = 400, description = "Malformed identifier", body = crate::domain::Error),
        (status = 401, description = "Unauthorised", body = crate::domain::Error),
        (status = 500, description = "Store failure", body = crate::domain::Error),
        (status = 503, description = "Store unavailable", body = crate::domain::Error)
    ),
    tags = ["invoices"],
    operation_id = "deleteInvoice"
)]
#[delete("/invoices/{id}")]
pub async fn delete_invoice(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    session.require_user_id()?;
    let id = parse_invoice_id(&path)?;
    state.invoices.delete_invoice(&id).await?;
    Ok(HttpResponse::NoContent().finish())
}
