use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use actix_web::cookie::{Cookie, SameSite};
use actix_web::{http::header, HttpRequest, HttpResponse};
use entity::user::Model as UserModel;

pub const SESSION_COOKIE: &str = "shop_session";

pub fn session_cookie(token: String) -> Cookie<'static> {
    let mut cookie = Cookie::new(SESSION_COOKIE, token);
    cookie.set_path("/");
    cookie.set_http_only(true);
    cookie.set_same_site(SameSite::Lax);
    cookie
}

pub fn removal_cookie() -> Cookie<'static> {
    let mut cookie = Cookie::new(SESSION_COOKIE, "");
    cookie.set_path("/");
    cookie.make_removal();
    cookie
}

pub fn session_token(req: &HttpRequest) -> Option<String> {
    req.cookie(SESSION_COOKIE).map(|c| c.value().to_string())
}

/// Resolve the request's session cookie to a user. A missing or stale
/// cookie is `None`, not an error.
pub async fn current_user(
    req: &HttpRequest,
    db: &PostgresService,
) -> Result<Option<UserModel>, AppError> {
    let Some(token) = session_token(req) else {
        return Ok(None);
    };
    db.session_user(&token).await
}

pub fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// Redirect an unauthenticated request to the login form, carrying the
/// page it wanted as `next`.
pub fn login_redirect(next: &str) -> HttpResponse {
    see_other(&format!("/account/login?next={}", urlencoding::encode(next)))
}

/// Only follow local redirect targets; anything else falls back to home.
pub fn safe_next(next: Option<&str>) -> &str {
    match next {
        Some(n) if n.starts_with('/') && !n.starts_with("//") => n,
        _ => "/",
    }
}
