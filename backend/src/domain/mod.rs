//! Domain primitives, form validation and action services.
//!
//! Purpose: hold everything the invoice dashboard decides on its own. Types
//! are immutable once validated and document their invariants and serde
//! contracts in Rustdoc. Collaborators (store, render cache, credential
//! verifier) are reached only through [`ports`].
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure payload.
//! - FormPayload: raw form submission.
//! - validate_invoice_form / FieldErrors: invoice input rules.
//! - ActionState / ActionOutcome / NavigationPath: what an action returns.
//! - InvoiceActionService: create, update and delete invoice actions.
//! - AuthenticationService: sign-in action.

pub mod action_state;
pub mod auth;
pub mod authentication;
pub mod error;
pub mod form;
pub mod invoice;
pub mod invoice_actions;
pub mod invoice_form;
pub mod ports;
pub mod trace_id;
pub mod user;

pub use self::action_state::{
    ActionOutcome, ActionState, DASHBOARD_PATH, INVOICES_PATH, InvalidNavigationPath, LOGIN_PATH,
    NavigationPath,
};
pub use self::auth::{
    AuthErrorKind, CredentialsValidationError, LoginCredentials, PASSWORD_MIN_LEN, SignInStrategy,
};
pub use self::authentication::{
    AuthenticateOutcome, AuthenticationService, INVALID_CREDENTIALS_MESSAGE,
    SIGN_IN_FAILED_MESSAGE,
};
pub use self::error::{Error, ErrorCode, TRACE_ID_HEADER};
pub use self::form::FormPayload;
pub use self::invoice::{
    CustomerId, INVOICE_DATE_FORMAT, InvoiceAmount, InvoiceAmountError, InvoiceChanges, InvoiceId,
    InvoiceIdParseError, InvoiceStatus, NewInvoice, UnknownInvoiceStatus,
};
pub use self::invoice_actions::{
    CREATE_INVALID_MESSAGE, InvoiceActionService, UPDATE_INVALID_MESSAGE,
};
pub use self::invoice_form::{
    AMOUNT_NOT_POSITIVE_MESSAGE, AMOUNT_TOO_LARGE_MESSAGE, CUSTOMER_REQUIRED_MESSAGE, FieldErrors,
    InvoiceField, STATUS_REQUIRED_MESSAGE, validate_invoice_form,
};
pub use self::trace_id::TraceId;
pub use self::user::{AuthenticatedUser, UserId, UserIdValidationError};
