use actix_web::{get, web, HttpResponse};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::utils::webutils::session_cookie;

#[derive(Deserialize)]
pub struct ConfirmQuery {
    pub user: Option<String>,
    pub email: Option<String>,
}

#[derive(Serialize)]
struct EmailConfirmedPage {
    new_email: String,
}

#[derive(Serialize)]
struct RegistrationConfirmedPage {
    email: String,
}

fn required_params<'a>(
    query: &'a ConfirmQuery,
    message: &str,
) -> Result<(&'a str, &'a str), AppError> {
    match (query.user.as_deref(), query.email.as_deref()) {
        (Some(user), Some(email)) if !user.is_empty() && !email.is_empty() => Ok((user, email)),
        _ => Err(AppError::BadRequest(message.to_string())),
    }
}

/// Applies a pending email change. Every precondition failure is a blunt
/// 400 with a plain message. The link carries no token and stays valid
/// for as long as its preconditions hold.
#[get("")]
async fn confirm_email(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    query: web::Query<ConfirmQuery>,
) -> Result<HttpResponse, AppError> {
    let (user_param, email) = required_params(&query, "Bad request: no user or email")?;

    let user_id: Uuid = user_param
        .parse()
        .map_err(|_| AppError::BadRequest("User not found".to_string()))?;

    let user = match db.get_user_by_id(&user_id).await {
        Ok(user) => user,
        Err(AppError::NotFound) => {
            return Err(AppError::BadRequest("User not found".to_string()))
        }
        Err(e) => return Err(e),
    };

    if db.email_taken_by_other(user.id, email).await? {
        return Err(AppError::BadRequest("This email already taken".to_string()));
    }

    db.set_user_email(user.id, email.to_string()).await?;

    Ok(HttpResponse::Ok().json(EmailConfirmedPage {
        new_email: email.to_string(),
    }))
}

/// Visiting the registration link is taken as proof of mailbox ownership
/// and simply logs the user in. The email parameter is not checked
/// against the stored address and nothing durable marks the account as
/// confirmed.
#[get("")]
async fn confirm_registration(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    query: web::Query<ConfirmQuery>,
) -> Result<HttpResponse, AppError> {
    let (user_param, email) = required_params(&query, "Bad request: No user or email")?;

    let user_id: Uuid = user_param
        .parse()
        .map_err(|_| AppError::BadRequest("Bad request: No user or email".to_string()))?;

    let user = match db.get_user_by_id(&user_id).await {
        Ok(user) => user,
        Err(AppError::NotFound) => {
            return Err(AppError::BadRequest("Bad request: No user or email".to_string()))
        }
        Err(e) => return Err(e),
    };

    let token = db.start_session(user.id).await?;

    Ok(HttpResponse::Ok()
        .cookie(session_cookie(token))
        .json(RegistrationConfirmedPage {
            email: email.to_string(),
        }))
}
