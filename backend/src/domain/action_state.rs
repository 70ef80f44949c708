//! Results handed back to the caller of a form action.
//!
//! A form action either re-renders the form with an [`ActionState`] or
//! transfers control to another page. The transfer is an ordinary value,
//! [`ActionOutcome::Redirect`], so nothing that handles errors can swallow it.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::FieldErrors;

/// Invoice listing page; invalidated and redirected to after every write.
pub const INVOICES_PATH: &str = "/dashboard/invoices";
/// Dashboard landing page; default destination after signing in.
pub const DASHBOARD_PATH: &str = "/dashboard";
/// Sign-in page.
pub const LOGIN_PATH: &str = "/login";

/// Error returned for paths that do not stay on this site.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("navigation path must be a local absolute path: {0}")]
pub struct InvalidNavigationPath(String);

/// Local absolute path the caller should navigate to.
///
/// ## Invariants
/// - Starts with a single `/`; protocol-relative (`//host`) and backslash
///   forms are rejected so a redirect can never leave the site.
///
/// # Examples
/// ```
/// use dashboard::domain::NavigationPath;
///
/// assert!(NavigationPath::new("/dashboard/invoices").is_ok());
/// assert!(NavigationPath::new("//evil.example").is_err());
/// assert!(NavigationPath::new("https://evil.example").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NavigationPath(String);

impl NavigationPath {
    /// Validate a caller-supplied path.
    pub fn new(path: impl Into<String>) -> Result<Self, InvalidNavigationPath> {
        let path = path.into();
        let local = path.starts_with('/')
            && !path.starts_with("//")
            && !path.starts_with("/\\")
            && !path.chars().any(char::is_control);
        if local {
            Ok(Self(path))
        } else {
            Err(InvalidNavigationPath(path))
        }
    }

    /// The invoice listing page.
    #[must_use]
    pub fn invoices() -> Self {
        Self(INVOICES_PATH.to_owned())
    }

    /// The dashboard landing page.
    #[must_use]
    pub fn dashboard() -> Self {
        Self(DASHBOARD_PATH.to_owned())
    }

    /// The sign-in page.
    #[must_use]
    pub fn login() -> Self {
        Self(LOGIN_PATH.to_owned())
    }
}

impl AsRef<str> for NavigationPath {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for NavigationPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Feedback rendered inline by the form that submitted the action.
///
/// Serialises as `{"errors": {...}, "message": "..."}` with absent parts
/// omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ActionState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    errors: Option<FieldErrors>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "Missing Fields. Failed to Create Invoice.")]
    message: Option<String>,
}

impl ActionState {
    /// State carrying field errors and a summary.
    pub fn invalid(errors: FieldErrors, message: impl Into<String>) -> Self {
        Self {
            errors: Some(errors),
            message: Some(message.into()),
        }
    }

    /// State carrying only a message.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            errors: None,
            message: Some(message.into()),
        }
    }

    /// Per-field errors, if validation failed.
    #[must_use]
    pub fn errors(&self) -> Option<&FieldErrors> {
        self.errors.as_ref()
    }

    /// Summary message, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

/// What a form action asks its caller to do next.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum ActionOutcome {
    /// Stay on the form and render this state.
    Render(ActionState),
    /// Leave the form and navigate to this path.
    Redirect(NavigationPath),
}
