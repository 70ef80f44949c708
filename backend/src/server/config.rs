//! HTTP server configuration object.

use std::net::SocketAddr;

use actix_web::cookie::{Key, SameSite};
use dashboard::outbound::credentials::StaticAccount;
use dashboard::outbound::persistence::DbPool;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) key: Key,
    pub(crate) cookie_secure: bool,
    pub(crate) same_site: SameSite,
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: Option<DbPool>,
    pub(crate) account: Option<StaticAccount>,
}

impl ServerConfig {
    /// Configuration with no database and no sign-in account.
    #[must_use]
    pub fn new(key: Key, cookie_secure: bool, same_site: SameSite, bind_addr: SocketAddr) -> Self {
        Self {
            key,
            cookie_secure,
            same_site,
            bind_addr,
            db_pool: None,
            account: None,
        }
    }

    /// Persist invoices through `pool` instead of the fixture repository.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    /// Accept `account` at sign-in.
    #[must_use]
    pub fn with_account(mut self, account: Option<StaticAccount>) -> Self {
        self.account = account;
        self
    }
}
