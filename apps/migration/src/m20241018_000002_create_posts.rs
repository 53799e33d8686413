use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // `uid` is deliberately not a foreign key: owner existence is checked
        // at write time only.
        manager
            .create_table(
                Table::create()
                    .table(Posts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Posts::Id)
                            .string_len(24)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Posts::Uid).string_len(24).not_null())
                    .col(ColumnDef::new(Posts::Caption).text().null())
                    .col(ColumnDef::new(Posts::ImageUrl).text().null())
                    .col(ColumnDef::new(Posts::PostedTimestamp).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("posts_uid_id_idx")
                    .table(Posts::Table)
                    .col(Posts::Uid)
                    .col(Posts::Id)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Posts::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Posts {
    Table,
    Id,
    Uid,
    Caption,
    ImageUrl,
    PostedTimestamp,
}
