//! Credential verifier backed by a single configured account.
//!
//! Stands in for an external identity provider: the `credentials` strategy
//! checks the submitted email and password against the account supplied by
//! configuration.

use async_trait::async_trait;
use tracing::debug;
use zeroize::Zeroizing;

use crate::domain::ports::{CredentialVerifier, SignInError};
use crate::domain::{
    AuthErrorKind, AuthenticatedUser, FormPayload, LoginCredentials, SignInStrategy, UserId,
};

/// Account the verifier accepts.
#[derive(Debug, Clone)]
pub struct StaticAccount {
    email: String,
    password: Zeroizing<String>,
    user_id: UserId,
}

impl StaticAccount {
    /// Describe the accepted account.
    pub fn new(email: impl Into<String>, password: Zeroizing<String>, user_id: UserId) -> Self {
        Self {
            email: email.into(),
            password,
            user_id,
        }
    }

    fn matches(&self, credentials: &LoginCredentials) -> bool {
        let email_matches = self.email.eq_ignore_ascii_case(credentials.email());
        let password_matches =
            constant_time_eq(self.password.as_bytes(), credentials.password().as_bytes());
        email_matches && password_matches
    }
}

/// Byte comparison whose running time depends only on the lengths.
fn constant_time_eq(expected: &[u8], submitted: &[u8]) -> bool {
    if expected.len() != submitted.len() {
        return false;
    }
    let diff = expected
        .iter()
        .zip(submitted)
        .fold(0_u8, |acc, (left, right)| acc | (left ^ right));
    std::hint::black_box(diff) == 0
}

/// [`CredentialVerifier`] for one statically configured account.
///
/// Without an account every attempt fails with
/// [`AuthErrorKind::Configuration`].
#[derive(Debug, Clone, Default)]
pub struct StaticCredentialVerifier {
    account: Option<StaticAccount>,
}

impl StaticCredentialVerifier {
    /// Verifier accepting `account`, or nothing when `None`.
    #[must_use]
    pub fn new(account: Option<StaticAccount>) -> Self {
        Self { account }
    }
}

#[async_trait]
impl CredentialVerifier for StaticCredentialVerifier {
    async fn sign_in(
        &self,
        strategy: SignInStrategy,
        form: &FormPayload,
    ) -> Result<AuthenticatedUser, SignInError> {
        let SignInStrategy::Credentials = strategy;
        let Some(account) = self.account.as_ref() else {
            return Err(SignInError::auth(AuthErrorKind::Configuration));
        };

        let credentials = LoginCredentials::from_form(form).map_err(|err| {
            debug!(%err, "malformed sign-in payload");
            SignInError::auth(AuthErrorKind::CredentialsSignin)
        })?;

        if account.matches(&credentials) {
            Ok(AuthenticatedUser::new(account.user_id, credentials.email()))
        } else {
            Err(SignInError::auth(AuthErrorKind::CredentialsSignin))
        }
    }
}
