use actix_web::{get, http::header, post, web, HttpResponse};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{LoginForm, LoginRequest};
use crate::utils::token::verify_password;
use crate::utils::webutils::{safe_next, session_cookie};

#[derive(Deserialize)]
pub struct NextQuery {
    pub next: Option<String>,
}

#[derive(Serialize)]
struct LoginError {
    error: &'static str,
}

// One response for unknown username, wrong password, or an undecodable
// stored hash. The caller learns nothing about which it was.
fn rejected() -> HttpResponse {
    HttpResponse::Unauthorized().json(LoginError {
        error: "incorrect login or password",
    })
}

#[get("")]
async fn form(_req: actix_web::HttpRequest) -> ApiResult<LoginForm> {
    Ok(ApiResponse::Ok(LoginForm::default()))
}

#[post("")]
async fn submit(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    query: web::Query<NextQuery>,
    body: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let user = match db.get_user_by_username(&body.username).await {
        Ok(user) => user,
        Err(AppError::NotFound) => return Ok(rejected()),
        Err(e) => return Err(e),
    };

    if !verify_password(&body.password, &user.password_hash).unwrap_or(false) {
        return Ok(rejected());
    }

    let token = db.start_session(user.id).await?;
    let location = safe_next(query.next.as_deref()).to_string();

    Ok(HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .cookie(session_cookie(token))
        .finish())
}
