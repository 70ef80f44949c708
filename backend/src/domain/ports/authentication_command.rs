//! Driving port for the sign-in action.

use async_trait::async_trait;

use crate::domain::{AuthenticateOutcome, Error, FormPayload};

/// Sign-in use-case consumed by inbound adapters.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthenticationCommand: Send + Sync {
    /// Sign in with the submitted form.
    ///
    /// Rejections the user can act on come back as
    /// [`AuthenticateOutcome::Rejected`]; anything else is an [`Error`].
    async fn authenticate(&self, form: &FormPayload) -> Result<AuthenticateOutcome, Error>;
}
