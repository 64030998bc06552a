use actix_web::{get, post, web, HttpRequest, HttpResponse};
use std::sync::Arc;
use validator::Validate;

use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::profile::{ProfileEditForm, ProfileEditRequest};
use crate::utils::mail::{send_confirmation_mail, ConfirmIntent};
use crate::utils::webutils::{current_user, login_redirect, see_other};

#[get("")]
async fn form(
    req: HttpRequest,
    db: web::Data<Arc<PostgresService>>,
) -> Result<HttpResponse, AppError> {
    let Some(user) = current_user(&req, &db).await? else {
        return Ok(login_redirect("/account/profile/edit"));
    };

    let profile = db.ensure_profile(user.id).await?;

    Ok(HttpResponse::Ok().json(ProfileEditForm {
        email: user.email,
        avatar: profile.avatar,
    }))
}

#[post("")]
async fn submit(
    req: HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    body: web::Json<ProfileEditRequest>,
) -> Result<HttpResponse, AppError> {
    let Some(user) = current_user(&req, &db).await? else {
        return Ok(login_redirect("/account/profile/edit"));
    };

    body.validate()?;
    db.ensure_profile(user.id).await?;

    // A changed email only triggers the confirmation mail; the stored
    // address does not move until the link is visited. The avatar, by
    // contrast, is written immediately.
    if body.email != user.email {
        send_confirmation_mail(&user, &body.email, ConfirmIntent::EmailChange).await?;
    }

    if let Some(avatar) = &body.avatar {
        db.set_profile_avatar(user.id, avatar.clone()).await?;
    }

    Ok(see_other("/account/profile"))
}
