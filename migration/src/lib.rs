pub use sea_orm_migration::prelude::*;

mod m20250610_000001_create_user_table;
mod m20250610_000002_create_profile_table;
mod m20250714_182300_create_session_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250610_000001_create_user_table::Migration),
            Box::new(m20250610_000002_create_profile_table::Migration),
            Box::new(m20250714_182300_create_session_table::Migration),
        ]
    }
}
