use actix_web::{get, web, HttpRequest, HttpResponse};
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::profile::ProfileView;
use crate::utils::webutils::{current_user, login_redirect};

#[get("")]
async fn view(
    req: HttpRequest,
    db: web::Data<Arc<PostgresService>>,
) -> Result<HttpResponse, AppError> {
    let Some(user) = current_user(&req, &db).await? else {
        return Ok(login_redirect("/account/profile"));
    };

    let profile = db.ensure_profile(user.id).await?;

    Ok(HttpResponse::Ok().json(ProfileView::new(&user, &profile)))
}
