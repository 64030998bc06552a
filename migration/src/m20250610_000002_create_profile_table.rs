use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.create_table(
            Table::create()
                .table(Profile::Table)
                .col(ColumnDef::new(Profile::Id).uuid().not_null().primary_key())
                .col(ColumnDef::new(Profile::UserId).uuid().not_null())
                .col(ColumnDef::new(Profile::Avatar).string().null())
                .col(ColumnDef::new(Profile::CreatedAt).timestamp_with_time_zone().not_null())
                .col(ColumnDef::new(Profile::UpdatedAt).timestamp_with_time_zone().not_null())
                .foreign_key(
                    ForeignKey::create()
                        .name("fk-profile-user")
                        .from_tbl(Profile::Table)
                        .from_col(Profile::UserId)
                        .to_tbl(User::Table)
                        .to_col(User::Id)
                        .on_update(ForeignKeyAction::Cascade)
                        .on_delete(ForeignKeyAction::Cascade),
                )
                .to_owned(),
        )
        .await?;

        m.create_index(
            Index::create()
                .name("idx-profile-user")
                .table(Profile::Table)
                .col(Profile::UserId)
                .to_owned(),
        )
        .await?;
        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(Table::drop().table(Profile::Table).if_exists().to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Profile {
    Table,
    Id,
    UserId,
    Avatar,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum User {
    Table,
    Id,
}
