use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::utils::token::{self, hash_session_token, new_session_token};
use chrono::Utc;
use entity::session::{ActiveModel as SessionActive, Entity as Session};
use entity::user::Model as UserModel;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, ModelTrait, QueryFilter, Set};
use uuid::Uuid;

impl PostgresService {
    /// Create a session row for the user and return the raw cookie token.
    /// Only the token digest is persisted.
    pub async fn start_session(&self, user_id: Uuid) -> Result<String, AppError> {
        let raw = new_session_token();
        SessionActive {
            id: Set(token::new_id()),
            user_id: Set(user_id),
            token_hash: Set(hash_session_token(&raw)),
            created_at: Set(Utc::now()),
        }
        .insert(&self.db)
        .await?;
        Ok(raw)
    }

    /// Resolve a raw cookie token to its user, if the session exists.
    pub async fn session_user(&self, raw_token: &str) -> Result<Option<UserModel>, AppError> {
        let Some(session) = Session::find()
            .filter(entity::session::Column::TokenHash.eq(hash_session_token(raw_token)))
            .one(&self.db)
            .await?
        else {
            return Ok(None);
        };
        Ok(session
            .find_related(entity::user::Entity)
            .one(&self.db)
            .await?)
    }

    /// Delete the session for a raw token. Missing sessions are a no-op.
    pub async fn end_session(&self, raw_token: &str) -> Result<(), AppError> {
        Session::delete_many()
            .filter(entity::session::Column::TokenHash.eq(hash_session_token(raw_token)))
            .exec(&self.db)
            .await?;
        Ok(())
    }
}
