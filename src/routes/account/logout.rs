use actix_web::{http::header, route, web, HttpRequest, HttpResponse};
use std::sync::Arc;
use tracing::error;

use crate::db::postgres_service::PostgresService;
use crate::utils::webutils::{removal_cookie, session_token};

/// Ends the session unconditionally. Visiting without a session is a
/// no-op; the response is the same either way.
#[route("", method = "GET", method = "POST")]
async fn logout(req: HttpRequest, db: web::Data<Arc<PostgresService>>) -> HttpResponse {
    if let Some(token) = session_token(&req) {
        if let Err(e) = db.end_session(&token).await {
            error!("Failed to delete session: {e}");
        }
    }

    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, "/"))
        .cookie(removal_cookie())
        .finish()
}
