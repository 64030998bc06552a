use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection, DbErr};
use tracing::info;

#[derive(Clone)]
pub struct PostgresService {
    pub(crate) db: DatabaseConnection,
}

impl PostgresService {
    pub async fn new(uri: &str) -> Result<Self, DbErr> {
        info!("Connecting to PostgreSQL...");
        let db = Database::connect(uri).await?;
        info!("Running migrations...");
        Migrator::up(&db, None).await?;
        info!("Connected to PostgreSQL.");
        Ok(Self { db })
    }

    /// Wrap an already-established connection. Migrations must have run.
    pub fn from_connection(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn ping(&self) -> Result<(), DbErr> {
        self.db.ping().await
    }
}
