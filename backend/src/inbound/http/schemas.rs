//! OpenAPI schemas for form-encoded request bodies.
//!
//! Handlers accept forms as a raw [`crate::domain::FormPayload`] so the
//! validator sees exactly what was submitted. These structs only describe
//! the expected fields for the generated document.

use utoipa::ToSchema;

/// Fields of the create and edit invoice forms.
#[derive(ToSchema)]
#[schema(as = InvoiceForm, rename_all = "camelCase")]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct InvoiceFormSchema {
    /// Customer being billed.
    #[schema(example = "3958dc9e-712f-4377-85e9-fec4b6a6442a")]
    customer_id: String,
    /// Amount in currency units; must be greater than zero.
    #[schema(example = "42.50")]
    amount: String,
    /// `pending` or `paid`.
    #[schema(example = "pending")]
    status: String,
}

/// Fields of the sign-in form.
#[derive(ToSchema)]
#[schema(as = LoginForm, rename_all = "camelCase")]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct LoginFormSchema {
    /// Account email.
    #[schema(example = "user@nextmail.com")]
    email: String,
    /// Account password.
    #[schema(example = "123456")]
    password: String,
    /// Local path to open after signing in; defaults to `/dashboard`.
    #[schema(example = "/dashboard/invoices")]
    redirect_to: Option<String>,
}
