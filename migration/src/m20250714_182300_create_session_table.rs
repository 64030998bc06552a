use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.create_table(
            Table::create()
                .table(Session::Table)
                .col(ColumnDef::new(Session::Id).uuid().not_null().primary_key())
                .col(ColumnDef::new(Session::UserId).uuid().not_null())
                .col(ColumnDef::new(Session::TokenHash).string().not_null())
                .col(ColumnDef::new(Session::CreatedAt).timestamp_with_time_zone().not_null())
                .foreign_key(
                    ForeignKey::create()
                        .name("fk-session-user")
                        .from_tbl(Session::Table)
                        .from_col(Session::UserId)
                        .to_tbl(User::Table)
                        .to_col(User::Id)
                        .on_update(ForeignKeyAction::Cascade)
                        .on_delete(ForeignKeyAction::Cascade),
                )
                .to_owned(),
        )
        .await?;

        // Sessions are looked up by digest on every authenticated request.
        m.create_index(
            Index::create()
                .name("idx-session-token-hash")
                .table(Session::Table)
                .col(Session::TokenHash)
                .to_owned(),
        )
        .await?;
        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(Table::drop().table(Session::Table).if_exists().to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Session {
    Table,
    Id,
    UserId,
    TokenHash,
    CreatedAt,
}

#[derive(DeriveIden)]
enum User {
    Table,
    Id,
}
