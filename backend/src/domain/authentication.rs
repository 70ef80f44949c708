//! Sign-in action.
//!
//! Delegates to the credential verifier with the `credentials` strategy and
//! turns authentication-domain failures into messages the sign-in form can
//! show. Everything else propagates.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::domain::ports::{AuthenticationCommand, CredentialVerifier, SignInError};
use crate::domain::{
    AuthErrorKind, AuthenticatedUser, Error, FormPayload, NavigationPath, SignInStrategy,
};

/// Message shown when the verifier rejects the credentials.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid credentials.";
/// Message shown for any other authentication failure.
pub const SIGN_IN_FAILED_MESSAGE: &str = "Something went wrong.";

/// Form field naming where to go after signing in.
const REDIRECT_FIELD: &str = "redirectTo";

/// Result of a sign-in attempt the caller can act on.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum AuthenticateOutcome {
    /// The user is signed in and should be sent to `redirect_to`.
    SignedIn {
        /// Identity to store in the session.
        user: AuthenticatedUser,
        /// Local path to navigate to.
        redirect_to: NavigationPath,
    },
    /// The attempt failed; show this message on the sign-in form.
    Rejected(String),
}

/// Domain service implementing [`AuthenticationCommand`].
pub struct AuthenticationService<V: ?Sized> {
    verifier: Arc<V>,
}

impl<V: ?Sized> Clone for AuthenticationService<V> {
    fn clone(&self) -> Self {
        Self {
            verifier: Arc::clone(&self.verifier),
        }
    }
}

impl<V: ?Sized> AuthenticationService<V> {
    /// Create a service backed by `verifier`.
    pub fn new(verifier: Arc<V>) -> Self {
        Self { verifier }
    }
}

/// Destination after signing in: the submitted `redirectTo` when it is a
/// local path, otherwise the dashboard.
fn redirect_target(form: &FormPayload) -> NavigationPath {
    form.get(REDIRECT_FIELD)
        .map(str::trim)
        .filter(|raw| !raw.is_empty())
        .and_then(|raw| NavigationPath::new(raw).ok())
        .unwrap_or_else(NavigationPath::dashboard)
}

#[async_trait]
impl<V> AuthenticationCommand for AuthenticationService<V>
where
    V: CredentialVerifier + ?Sized,
{
    async fn authenticate(&self, form: &FormPayload) -> Result<AuthenticateOutcome, Error> {
        match self
            .verifier
            .sign_in(SignInStrategy::Credentials, form)
            .await
        {
            Ok(user) => {
                info!(user_id = %user.id(), "user signed in");
                Ok(AuthenticateOutcome::SignedIn {
                    user,
                    redirect_to: redirect_target(form),
                })
            }
            Err(SignInError::Auth {
                kind: AuthErrorKind::CredentialsSignin,
            }) => Ok(AuthenticateOutcome::Rejected(
                INVALID_CREDENTIALS_MESSAGE.to_owned(),
            )),
            Err(SignInError::Auth { kind }) => {
                warn!(%kind, "sign-in failed");
                Ok(AuthenticateOutcome::Rejected(SIGN_IN_FAILED_MESSAGE.to_owned()))
            }
            Err(SignInError::Other(err)) => Err(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use crate::domain::UserId;
    use crate::domain::ports::MockCredentialVerifier;
    use rstest::rstest;

    const USER_ID: &str = "410544b2-4001-4271-9855-fec4b6a6442a";

    fn signed_in_user() -> AuthenticatedUser {
        AuthenticatedUser::new(UserId::new(USER_ID).expect("user id"), "user@nextmail.com")
    }

    fn service_returning(
        result: Result<AuthenticatedUser, SignInError>,
    ) -> AuthenticationService<MockCredentialVerifier> {
        let mut verifier = MockCredentialVerifier::new();
        verifier
            .expect_sign_in()
            .withf(|strategy, form| {
                *strategy == SignInStrategy::Credentials
                    && form.get("email") == Some("user@nextmail.com")
            })
            .times(1)
            .return_once(move |_, _| result);
        AuthenticationService::new(Arc::new(verifier))
    }

    fn form(redirect_to: Option<&str>) -> FormPayload {
        let mut form = FormPayload::from_iter([
            ("email", "user@nextmail.com"),
            ("password", "123456"),
        ]);
        if let Some(path) = redirect_to {
            form.insert(REDIRECT_FIELD, path);
        }
        form
    }

    #[rstest]
    #[case(None, "/dashboard")]
    #[case(Some("/dashboard/invoices"), "/dashboard/invoices")]
    #[case(Some(""), "/dashboard")]
    #[case(Some("https://evil.example"), "/dashboard")]
    #[case(Some("//evil.example"), "/dashboard")]
    #[tokio::test]
    async fn success_redirects_to_local_target(
        #[case] redirect_to: Option<&str>,
        #[case] expected: &str,
    ) {
        let service = service_returning(Ok(signed_in_user()));
        let outcome = service
            .authenticate(&form(redirect_to))
            .await
            .expect("sign-in succeeds");
        match outcome {
            AuthenticateOutcome::SignedIn { user, redirect_to } => {
                assert_eq!(user, signed_in_user());
                assert_eq!(redirect_to.as_ref(), expected);
            }
            AuthenticateOutcome::Rejected(message) => panic!("unexpected rejection: {message}"),
        }
    }

    #[rstest]
    #[case(AuthErrorKind::CredentialsSignin, INVALID_CREDENTIALS_MESSAGE)]
    #[case(AuthErrorKind::AccessDenied, SIGN_IN_FAILED_MESSAGE)]
    #[case(AuthErrorKind::Configuration, SIGN_IN_FAILED_MESSAGE)]
    #[case(AuthErrorKind::CallbackRouteError, SIGN_IN_FAILED_MESSAGE)]
    #[tokio::test]
    async fn auth_failures_become_messages(#[case] kind: AuthErrorKind, #[case] expected: &str) {
        let service = service_returning(Err(SignInError::auth(kind)));
        let outcome = service.authenticate(&form(None)).await.expect("handled");
        assert_eq!(outcome, AuthenticateOutcome::Rejected(expected.to_owned()));
    }

    #[rstest]
    #[tokio::test]
    async fn other_failures_propagate_unchanged() {
        let failure = Error::service_unavailable("identity provider offline");
        let service = service_returning(Err(SignInError::Other(failure.clone())));
        let err = service
            .authenticate(&form(None))
            .await
            .expect_err("propagates");
        assert_eq!(err, failure);
        assert_eq!(err.code(), ErrorCode::ServiceUnavailable);
    }
}
