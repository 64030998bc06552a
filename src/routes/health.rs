use actix_web::{get, web};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::response::{ApiResponse, ApiResult};

#[derive(Serialize, Deserialize)]
pub struct Response {}

#[get("")]
async fn health(db: web::Data<Arc<PostgresService>>) -> ApiResult<Response> {
    db.ping().await?;
    Ok(ApiResponse::EmptyOk)
}
