use actix_web::{get, post, web};
use std::sync::Arc;
use validator::Validate;

use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{DBUserCreate, RegisterForm, RegisterRequest};
use crate::utils::mail::{send_confirmation_mail, ConfirmIntent};
use crate::utils::token::hash_password;

#[get("")]
async fn form(_req: actix_web::HttpRequest) -> ApiResult<RegisterForm> {
    Ok(ApiResponse::Ok(RegisterForm::default()))
}

#[post("")]
async fn submit(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    body: web::Json<RegisterRequest>,
) -> ApiResult<()> {
    body.validate()?;

    let password_hash = hash_password(&body.password)
        .map_err(|_| AppError::Internal("password hashing failed".to_string()))?;

    let user_id = db
        .create_user(DBUserCreate {
            username: body.username.clone(),
            email: body.email.clone(),
            password_hash,
        })
        .await?;

    // Delivery failure propagates after the insert: the account exists
    // even when the confirmation mail never went out.
    let user = db.get_user_by_id(&user_id).await?;
    send_confirmation_mail(&user, &user.email, ConfirmIntent::Registration).await?;

    Ok(ApiResponse::SeeOther("/".to_string()))
}
