//! Session signing key loading.

use std::io;
use std::path::{Path, PathBuf};

use actix_web::cookie::Key;
use tracing::warn;

/// Shortest key material accepted for derivation.
pub const MIN_KEY_LEN: usize = 32;

/// Failure to obtain a session key.
#[derive(Debug, thiserror::Error)]
pub enum SessionKeyError {
    /// The key file could not be read and no fallback is allowed.
    #[error("failed to read session key at {path}: {source}")]
    Read {
        /// Key file location.
        path: PathBuf,
        /// Underlying I/O failure.
        source: io::Error,
    },
    /// The key file is shorter than [`MIN_KEY_LEN`].
    #[error("session key at {path} is {len} bytes; at least {MIN_KEY_LEN} are required")]
    TooShort {
        /// Key file location.
        path: PathBuf,
        /// Bytes read.
        len: usize,
    },
}

/// Load the signing key from `path`.
///
/// When the file cannot be read and `allow_ephemeral` is set, or this is a
/// debug build, a random key is generated instead. Sessions signed with it do
/// not survive a restart.
///
/// # Errors
///
/// Returns [`SessionKeyError`] when the file is unreadable without a fallback
/// or holds too little key material.
pub fn load_session_key(path: &Path, allow_ephemeral: bool) -> Result<Key, SessionKeyError> {
    match std::fs::read(path) {
        Ok(bytes) if bytes.len() < MIN_KEY_LEN => Err(SessionKeyError::TooShort {
            path: path.to_path_buf(),
            len: bytes.len(),
        }),
        Ok(bytes) => Ok(Key::derive_from(&bytes)),
        Err(source) if allow_ephemeral || cfg!(debug_assertions) => {
            warn!(
                path = %path.display(),
                error = %source,
                "using temporary session key (dev only)"
            );
            Ok(Key::generate())
        }
        Err(source) => Err(SessionKeyError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}
