use crate::db::postgres_service::PostgresService;
use crate::types::{error::AppError, user::DBUserCreate};
use crate::utils::token;
use chrono::Utc;
use entity::user::{ActiveModel as UserActive, Entity as User, Model as UserModel};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, Set,
    TransactionTrait,
};
use uuid::Uuid;

impl PostgresService {
    pub async fn user_exists_by_email(&self, email: &str) -> Result<bool, AppError> {
        Ok(User::find()
            .filter(entity::user::Column::Email.eq(email))
            .count(&self.db)
            .await?
            > 0)
    }

    pub async fn user_exists_by_username(&self, username: &str) -> Result<bool, AppError> {
        Ok(User::find()
            .filter(entity::user::Column::Username.eq(username))
            .count(&self.db)
            .await?
            > 0)
    }

    /// True when `email` already belongs to some user other than `user_id`.
    pub async fn email_taken_by_other(&self, user_id: Uuid, email: &str) -> Result<bool, AppError> {
        Ok(User::find()
            .filter(entity::user::Column::Email.eq(email))
            .filter(entity::user::Column::Id.ne(user_id))
            .count(&self.db)
            .await?
            > 0)
    }

    pub async fn get_user_by_id(&self, id: &Uuid) -> Result<UserModel, AppError> {
        Ok(User::find_by_id(*id)
            .one(&self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("User does not exist".into()))?)
    }

    pub async fn get_user_by_username(&self, username: &str) -> Result<UserModel, AppError> {
        Ok(User::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(&self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("User does not exist".into()))?)
    }

    pub async fn get_user_by_email(&self, email: &str) -> Result<UserModel, AppError> {
        Ok(User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(&self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("User does not exist".into()))?)
    }

    /// Registration: create user. Username and email are checked for
    /// uniqueness here, before the insert, never by a constraint.
    pub async fn create_user(&self, payload: DBUserCreate) -> Result<Uuid, AppError> {
        if self.user_exists_by_username(&payload.username).await? {
            return Err(AppError::AlreadyExists);
        }
        if self.user_exists_by_email(&payload.email).await? {
            return Err(AppError::AlreadyExists);
        }
        let uid = token::new_id();
        let now = Utc::now();
        let txn = self.db.begin().await?;

        User::insert(UserActive {
            id: Set(uid),
            username: Set(payload.username),
            email: Set(payload.email),
            password_hash: Set(payload.password_hash),
            created_at: Set(now),
            updated_at: Set(now),
        })
        .exec(&txn)
        .await?;

        txn.commit().await?;
        Ok(uid)
    }

    /// Overwrite the stored email. Callers are responsible for the
    /// email-taken check; this is the plain persist step.
    pub async fn set_user_email(&self, user_id: Uuid, email: String) -> Result<(), AppError> {
        let mut am: UserActive = self.get_user_by_id(&user_id).await?.into();
        am.email = Set(email);
        am.updated_at = Set(Utc::now());
        Ok(am.update(&self.db).await.map(|_| ())?)
    }
}
