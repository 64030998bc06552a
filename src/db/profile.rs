use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::utils::token;
use chrono::Utc;
use entity::profile::{ActiveModel as ProfileActive, Entity as Profile, Model as ProfileModel};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

impl PostgresService {
    /// Get-or-create the profile row for a user. Idempotent: returns the
    /// existing row when there is one, otherwise inserts an empty profile.
    /// Two concurrent first calls can race; last write wins.
    pub async fn ensure_profile(&self, user_id: Uuid) -> Result<ProfileModel, AppError> {
        if let Some(profile) = Profile::find()
            .filter(entity::profile::Column::UserId.eq(user_id))
            .one(&self.db)
            .await?
        {
            return Ok(profile);
        }

        let now = Utc::now();
        let profile = ProfileActive {
            id: Set(token::new_id()),
            user_id: Set(user_id),
            avatar: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&self.db)
        .await?;
        Ok(profile)
    }

    pub async fn set_profile_avatar(
        &self,
        user_id: Uuid,
        avatar: String,
    ) -> Result<(), AppError> {
        let mut am: ProfileActive = self.ensure_profile(user_id).await?.into();
        am.avatar = Set(Some(avatar));
        am.updated_at = Set(Utc::now());
        Ok(am.update(&self.db).await.map(|_| ())?)
    }
}
