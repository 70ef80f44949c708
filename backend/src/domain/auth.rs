//! Authentication primitives: sign-in credentials and failure kinds.

use std::fmt;

use zeroize::Zeroizing;

use super::FormPayload;

/// Minimum password length accepted by the credentials strategy.
pub const PASSWORD_MIN_LEN: usize = 6;

/// Reasons a credentials payload is malformed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialsValidationError {
    /// Email was missing or does not look like an address.
    InvalidEmail,
    /// Password was missing or shorter than [`PASSWORD_MIN_LEN`].
    PasswordTooShort,
}

impl fmt::Display for CredentialsValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEmail => write!(f, "email must be a valid address"),
            Self::PasswordTooShort => write!(
                f,
                "password must be at least {PASSWORD_MIN_LEN} characters"
            ),
        }
    }
}

impl std::error::Error for CredentialsValidationError {}

/// Email and password submitted to the credentials strategy.
///
/// ## Invariants
/// - `email` is trimmed and has a non-empty local part and domain.
/// - `password` keeps caller whitespace and is at least
///   [`PASSWORD_MIN_LEN`] characters; it is zeroed on drop.
///
/// # Examples
/// ```
/// use dashboard::domain::LoginCredentials;
///
/// let creds = LoginCredentials::try_from_parts(" user@nextmail.com ", "123456").unwrap();
/// assert_eq!(creds.email(), "user@nextmail.com");
/// assert!(LoginCredentials::try_from_parts("user", "123456").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    email: String,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Construct credentials from raw email/password inputs.
    pub fn try_from_parts(email: &str, password: &str) -> Result<Self, CredentialsValidationError> {
        let email = email.trim();
        let well_formed = email
            .split_once('@')
            .is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.'));
        if !well_formed || email.chars().any(char::is_whitespace) {
            return Err(CredentialsValidationError::InvalidEmail);
        }

        if password.chars().count() < PASSWORD_MIN_LEN {
            return Err(CredentialsValidationError::PasswordTooShort);
        }

        Ok(Self {
            email: email.to_owned(),
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Read `email` and `password` from a submitted sign-in form.
    pub fn from_form(form: &FormPayload) -> Result<Self, CredentialsValidationError> {
        let email = form
            .get("email")
            .ok_or(CredentialsValidationError::InvalidEmail)?;
        let password = form.get("password").unwrap_or_default();
        Self::try_from_parts(email, password)
    }

    /// Normalised email address.
    #[must_use]
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Password as submitted.
    #[must_use]
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

/// Sign-in strategy requested from the credential verifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignInStrategy {
    /// Email and password checked against a known account.
    Credentials,
}

impl SignInStrategy {
    /// Strategy identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Credentials => "credentials",
        }
    }
}

impl fmt::Display for SignInStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Subtype of an authentication-domain failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthErrorKind {
    /// The credentials were rejected.
    CredentialsSignin,
    /// The account is not allowed to sign in.
    AccessDenied,
    /// The verifier is misconfigured.
    Configuration,
    /// The verifier failed while processing the request.
    CallbackRouteError,
}

impl AuthErrorKind {
    /// Stable subtype name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CredentialsSignin => "CredentialsSignin",
            Self::AccessDenied => "AccessDenied",
            Self::Configuration => "Configuration",
            Self::CallbackRouteError => "CallbackRouteError",
        }
    }
}

impl fmt::Display for AuthErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
