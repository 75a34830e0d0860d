use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BlogUser::Table)
                    .if_not_exists()
                    .col(pk_auto(BlogUser::Id))
                    .col(string(BlogUser::Name))
                    .col(string_uniq(BlogUser::Email))
                    .col(string(BlogUser::Password))
                    .col(
                        ColumnDef::new(BlogUser::IsAdmin)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BlogUser::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BlogUser {
    Table,
    Id,
    Name,
    Email,
    Password,
    IsAdmin,
}
