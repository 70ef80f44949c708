//! Shared harness for HTTP integration tests.

pub mod doubles;

use std::sync::Arc;

use actix_session::SessionMiddleware;
use actix_session::config::CookieContentSecurity;
use actix_session::storage::CookieSessionStore;
use actix_web::cookie::{Cookie, Key, SameSite};
use actix_web::dev::ServiceResponse;
use actix_web::web;
use chrono::{DateTime, Local, TimeZone, Utc};
use dashboard::domain::{AuthenticationService, InvoiceActionService, UserId};
use dashboard::inbound::http::state::HttpState;
use dashboard::outbound::cache::InMemoryPathRevalidator;
use dashboard::outbound::credentials::{StaticAccount, StaticCredentialVerifier};
use mockable::Clock;
use zeroize::Zeroizing;

use doubles::RecordingInvoiceRepository;

pub const ACCOUNT_EMAIL: &str = "user@nextmail.com";
pub const ACCOUNT_PASSWORD: &str = "123456";
pub const ACCOUNT_USER_ID: &str = "410544b2-4001-4271-9855-fec4b6a6442a";

/// Clock pinned to 2024-03-15 09:00 UTC.
pub struct PinnedClock;

impl Clock for PinnedClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 9, 0, 0)
            .single()
            .expect("valid timestamp")
    }
}

/// Adapters behind a test app, kept so assertions can inspect them.
pub struct Harness {
    pub repository: Arc<RecordingInvoiceRepository>,
    pub revalidator: Arc<InMemoryPathRevalidator>,
    state: web::Data<HttpState>,
}

impl Harness {
    pub fn new(repository: RecordingInvoiceRepository) -> Self {
        let repository = Arc::new(repository);
        let revalidator = Arc::new(InMemoryPathRevalidator::new());
        let invoices = InvoiceActionService::new(
            Arc::clone(&repository),
            Arc::clone(&revalidator),
            Arc::new(PinnedClock),
        );
        let account = StaticAccount::new(
            ACCOUNT_EMAIL,
            Zeroizing::new(ACCOUNT_PASSWORD.to_owned()),
            UserId::new(ACCOUNT_USER_ID).expect("user id"),
        );
        let authentication =
            AuthenticationService::new(Arc::new(StaticCredentialVerifier::new(Some(account))));
        let state = web::Data::new(HttpState::new(Arc::new(invoices), Arc::new(authentication)));
        Self {
            repository,
            revalidator,
            state,
        }
    }

    /// Handler state to register with `App::app_data`.
    pub fn state(&self) -> web::Data<HttpState> {
        self.state.clone()
    }
}

/// Cookie session middleware configured as in production, minus `Secure`.
pub fn session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name("session".into())
        .cookie_secure(false)
        .cookie_http_only(true)
        .cookie_content_security(CookieContentSecurity::Private)
        .cookie_same_site(SameSite::Lax)
        .build()
}

/// Build the `/api/v1` app around a [`Harness`].
macro_rules! init_app {
    ($harness:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data($harness.state())
                .wrap(dashboard::Trace)
                .service(
                    actix_web::web::scope("/api/v1")
                        .wrap($crate::support::session_middleware())
                        .service(dashboard::inbound::http::invoices::create_invoice)
                        .service(dashboard::inbound::http::invoices::update_invoice)
                        .service(dashboard::inbound::http::invoices::delete_invoice)
                        .service(dashboard::inbound::http::login::login)
                        .service(dashboard::inbound::http::login::logout),
                ),
        )
        .await
    };
}

/// Session cookie set by `res`, if any.
pub fn session_cookie<B>(res: &ServiceResponse<B>) -> Option<Cookie<'static>> {
    res.response()
        .cookies()
        .find(|cookie| cookie.name() == "session")
        .map(Cookie::into_owned)
}

/// `Location` header of `res`.
pub fn location<B>(res: &ServiceResponse<B>) -> Option<String> {
    res.headers()
        .get(actix_web::http::header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
}
