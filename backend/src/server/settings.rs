//! Server settings loaded via OrthoConfig.
//!
//! Values layer from CLI flags, `DASHBOARD_*` environment variables and an
//! optional config file.

use std::net::SocketAddr;
use std::path::PathBuf;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Deserializer};
use zeroize::Zeroizing;

use dashboard::domain::{UserId, UserIdValidationError};
use dashboard::outbound::credentials::StaticAccount;
use dashboard::outbound::persistence::DEFAULT_MAX_SIZE;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_SESSION_KEY_FILE: &str = "/var/run/secrets/session_key";
const DEFAULT_ACCOUNT_USER_ID: &str = "410544b2-4001-4271-9855-fec4b6a6442a";

/// Invalid setting values detected after loading.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// The bind address is not `host:port`.
    #[error("invalid bind address {value:?}: {source}")]
    BindAddr {
        value: String,
        source: std::net::AddrParseError,
    },
    /// The account user id is not a UUID.
    #[error("invalid sign-in account user id: {0}")]
    AccountUserId(#[from] UserIdValidationError),
    /// Only one of email and password was supplied.
    #[error("sign-in account needs both an email and a password")]
    IncompleteAccount,
}

/// Settings for the dashboard server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "DASHBOARD")]
pub struct DashboardSettings {
    /// Socket address to listen on.
    pub bind_addr: Option<String>,
    /// PostgreSQL URL; the fixture repository is used when absent.
    pub database_url: Option<String>,
    /// Maximum pooled connections.
    pub pool_max_size: Option<u32>,
    /// File holding the session signing key.
    pub session_key_file: Option<PathBuf>,
    /// Mark the session cookie `Secure`; defaults to on.
    #[ortho_config(default = true)]
    pub cookie_secure: bool,
    /// Generate a throwaway session key when the key file is unreadable.
    #[ortho_config(default = false)]
    pub allow_ephemeral_session_key: bool,
    /// Email of the account accepted at sign-in.
    #[serde(default, deserialize_with = "scalar_as_text")]
    pub account_email: Option<String>,
    /// Password of the account accepted at sign-in.
    #[serde(default, deserialize_with = "scalar_as_text")]
    pub account_password: Option<String>,
    /// User id assigned to the signed-in account.
    #[serde(default, deserialize_with = "scalar_as_text")]
    pub account_user_id: Option<String>,
}

/// Read a free-text setting that the environment layer may have typed.
///
/// `DASHBOARD_ACCOUNT_PASSWORD=123456` arrives as an integer; it is turned
/// back into text here. Numbers are re-rendered, so a value with leading zeros
/// or trailing decimal digits belongs in the config file as a quoted string.
fn scalar_as_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        Text(String),
        Unsigned(u64),
        Signed(i64),
        Float(f64),
        Flag(bool),
    }

    Ok(
        Option::<Scalar>::deserialize(deserializer)?.map(|value| match value {
            Scalar::Text(text) => text,
            Scalar::Unsigned(number) => number.to_string(),
            Scalar::Signed(number) => number.to_string(),
            Scalar::Float(number) => number.to_string(),
            Scalar::Flag(flag) => flag.to_string(),
        }),
    )
}

impl DashboardSettings {
    /// Parsed listen address.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::BindAddr`] when the value is not a socket
    /// address.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let value = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        value.parse().map_err(|source| SettingsError::BindAddr {
            value: value.to_owned(),
            source,
        })
    }

    /// Configured database URL, ignoring blank values.
    #[must_use]
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// Pool size, falling back to the persistence default.
    #[must_use]
    pub fn pool_max_size(&self) -> u32 {
        self.pool_max_size.unwrap_or(DEFAULT_MAX_SIZE)
    }

    /// Session key location.
    #[must_use]
    pub fn session_key_file(&self) -> PathBuf {
        self.session_key_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SESSION_KEY_FILE))
    }

    /// Whether the session cookie carries the `Secure` attribute.
    #[must_use]
    pub const fn cookie_secure(&self) -> bool {
        self.cookie_secure
    }

    /// The sign-in account, if one is configured.
    ///
    /// # Errors
    ///
    /// Fails when only one of email and password is set, or when the user id
    /// is not a UUID.
    pub fn account(&self) -> Result<Option<StaticAccount>, SettingsError> {
        let (email, password) = match (&self.account_email, &self.account_password) {
            (None, None) => return Ok(None),
            (Some(email), Some(password)) => (email, password),
            _ => return Err(SettingsError::IncompleteAccount),
        };
        let user_id = UserId::new(
            self.account_user_id
                .as_deref()
                .unwrap_or(DEFAULT_ACCOUNT_USER_ID),
        )?;
        Ok(Some(StaticAccount::new(
            email.trim(),
            Zeroizing::new(password.clone()),
            user_id,
        )))
    }
}
