//! Port for the external sign-in collaborator.
//!
//! The verifier receives the raw form so that strategies can read whichever
//! fields they need. Failures are split into authentication-domain errors,
//! which the sign-in action turns into curated messages, and everything
//! else, which it propagates unchanged.

use async_trait::async_trait;

use crate::domain::{AuthErrorKind, AuthenticatedUser, Error, FormPayload, SignInStrategy};

/// Failure reported by a [`CredentialVerifier`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SignInError {
    /// The verifier refused the sign-in for an authentication reason.
    #[error("sign-in failed: {kind}")]
    Auth {
        /// Subtype of the failure.
        kind: AuthErrorKind,
    },
    /// Anything else went wrong.
    #[error(transparent)]
    Other(#[from] Error),
}

impl SignInError {
    /// Authentication-domain failure of the given subtype.
    #[must_use]
    pub const fn auth(kind: AuthErrorKind) -> Self {
        Self::Auth { kind }
    }
}

/// Verifies sign-in attempts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    /// Attempt to sign in with `strategy` using the submitted `form`.
    async fn sign_in(
        &self,
        strategy: SignInStrategy,
        form: &FormPayload,
    ) -> Result<AuthenticatedUser, SignInError>;
}
