//! Translate form action outcomes into HTTP responses.

use actix_web::HttpResponse;
use actix_web::http::header;
use serde_json::json;

use crate::domain::{ActionOutcome, Error, InvoiceId, NavigationPath};

/// `303 See Other` to `path`, so browsers follow with a GET.
pub fn see_other(path: &NavigationPath) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, path.as_ref()))
        .finish()
}

/// Render state as `200` JSON; redirects as `303`.
pub fn outcome_response(outcome: ActionOutcome) -> HttpResponse {
    match outcome {
        ActionOutcome::Render(state) => HttpResponse::Ok().json(state),
        ActionOutcome::Redirect(path) => see_other(&path),
    }
}

/// Parse the `{id}` path segment.
pub(crate) fn parse_invoice_id(raw: &str) -> Result<InvoiceId, Error> {
    InvoiceId::new(raw).map_err(|_| {
        Error::invalid_request("invoice id must be a valid UUID").with_details(json!({
            "field": "id",
            "value": raw,
            "code": "invalid_uuid",
        }))
    })
}
