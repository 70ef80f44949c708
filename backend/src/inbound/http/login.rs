//! Sign-in and sign-out handlers.
//!
//! ```text
//! POST /api/v1/login   email=user@nextmail.com&password=123456&redirectTo=/dashboard
//! POST /api/v1/logout
//! ```

use actix_web::{HttpResponse, post, web};

use crate::domain::{ActionState, AuthenticateOutcome, FormPayload, NavigationPath};
use crate::inbound::http::ApiResult;
use crate::inbound::http::action::see_other;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Sign in with the submitted form and establish a session.
#[utoipa::path(
    post,
    path = "/api/v1/login",
    request_body(
        content = crate::inbound::http::schemas::LoginFormSchema,
        content_type = "application/x-www-form-urlencoded"
    ),
    responses(
        (status = 200, description = "Sign-in rejected", body = ActionState),
        (status = 303, description = "Signed in", headers(
            ("Location" = String, description = "Requested page or the dashboard"),
            ("Set-Cookie" = String, description = "Session cookie")
        )),
        (status = 500, description = "Internal server error", body = crate::domain::Error)
    ),
    tags = ["session"],
    operation_id = "login",
    security([])
)]
#[post("/login")]
pub async fn login(
    state: web::Data<HttpState>,
    session: SessionContext,
    form: web::Form<FormPayload>,
) -> ApiResult<HttpResponse> {
    match state.authentication.authenticate(&form).await? {
        AuthenticateOutcome::SignedIn { user, redirect_to } => {
            session.persist_user(&user)?;
            Ok(see_other(&redirect_to))
        }
        AuthenticateOutcome::Rejected(message) => {
            Ok(HttpResponse::Ok().json(ActionState::with_message(message)))
        }
    }
}

/// End the session and return to the sign-in page.
#[utoipa::path(
    post,
    path = "/api/v1/logout",
    responses(
        (status = 303, description = "Signed out", headers(("Location" = String, description = "Sign-in page")))
    ),
    tags = ["session"],
    operation_id = "logout",
    security([])
)]
#[post("/logout")]
pub async fn logout(session: SessionContext) -> HttpResponse {
    session.clear();
    see_other(&NavigationPath::login())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::domain::ports::{MockAuthenticationCommand, MockInvoiceCommand};
    use crate::domain::{AuthenticatedUser, Error, UserId};
    use crate::inbound::http::test_utils::{session_cookie, test_session_middleware};
    use actix_web::http::{StatusCode, header};
    use actix_web::{App, test};
    use rstest::rstest;
    use serde_json::{Value, json};

    const USER_ID: &str = "410544b2-4001-4271-9855-fec4b6a6442a";

    async fn whoami(session: SessionContext) -> ApiResult<HttpResponse> {
        let id = session.require_user_id()?;
        Ok(HttpResponse::Ok().body(id.to_string()))
    }

    macro_rules! init_app {
        ($authentication:expr) => {
            test::init_service(
                App::new()
                    .wrap(test_session_middleware())
                    .app_data(web::Data::new(HttpState::new(
                        Arc::new(MockInvoiceCommand::new()),
                        Arc::new($authentication),
                    )))
                    .route("/whoami", web::get().to(whoami))
                    .service(web::scope("/api/v1").service(login).service(logout)),
            )
            .await
        };
    }

    fn login_request() -> test::TestRequest {
        test::TestRequest::post().uri("/api/v1/login").set_form([
            ("email", "user@nextmail.com"),
            ("password", "123456"),
            ("redirectTo", "/dashboard/invoices"),
        ])
    }

    #[actix_web::test]
    async fn success_sets_session_and_redirects() {
        let mut authentication = MockAuthenticationCommand::new();
        authentication
            .expect_authenticate()
            .withf(|form| form.get("redirectTo") == Some("/dashboard/invoices"))
            .times(1)
            .returning(|_| {
                Ok(AuthenticateOutcome::SignedIn {
                    user: AuthenticatedUser::new(
                        UserId::new(USER_ID).expect("user id"),
                        "user@nextmail.com",
                    ),
                    redirect_to: NavigationPath::new("/dashboard/invoices").expect("path"),
                })
            });
        let app = init_app!(authentication);

        let res = test::call_service(&app, login_request().to_request()).await;
        assert_eq!(res.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            res.headers()
                .get(header::LOCATION)
                .and_then(|value| value.to_str().ok()),
            Some("/dashboard/invoices")
        );
        let cookie = session_cookie(&res).expect("session cookie");

        let res = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/whoami")
                .cookie(cookie)
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(test::read_body(res).await, USER_ID);
    }

    #[rstest]
    #[case("Invalid credentials.")]
    #[case("Something went wrong.")]
    #[actix_web::test]
    async fn rejection_renders_message(#[case] message: &'static str) {
        let mut authentication = MockAuthenticationCommand::new();
        authentication
            .expect_authenticate()
            .times(1)
            .returning(move |_| Ok(AuthenticateOutcome::Rejected(message.to_owned())));
        let app = init_app!(authentication);

        let res = test::call_service(&app, login_request().to_request()).await;
        assert_eq!(res.status(), StatusCode::OK);
        assert!(session_cookie(&res).is_none());
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body, json!({ "message": message }));
    }

    #[actix_web::test]
    async fn unexpected_failures_propagate() {
        let mut authentication = MockAuthenticationCommand::new();
        authentication
            .expect_authenticate()
            .times(1)
            .returning(|_| Err(Error::service_unavailable("identity provider offline")));
        let app = init_app!(authentication);

        let res = test::call_service(&app, login_request().to_request()).await;
        assert_eq!(res.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[actix_web::test]
    async fn logout_redirects_to_login() {
        let app = init_app!(MockAuthenticationCommand::new());

        let res = test::call_service(
            &app,
            test::TestRequest::post().uri("/api/v1/logout").to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            res.headers()
                .get(header::LOCATION)
                .and_then(|value| value.to_str().ok()),
            Some("/login")
        );
    }
}
