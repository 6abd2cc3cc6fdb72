use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // One row per country per year, written by whatever loads the data set.
        manager
            .create_table(
                Table::create()
                    .table(Gdp::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Gdp::Country).string().not_null())
                    .col(ColumnDef::new(Gdp::Year).integer().not_null())
                    .col(ColumnDef::new(Gdp::Gdp).double().not_null())
                    .primary_key(Index::create().col(Gdp::Country).col(Gdp::Year))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Gdp::Table).to_owned())
            .await
    }
}

/// Learn more at https://docs.rs/sea-query#iden
#[derive(Iden)]
pub(crate) enum Gdp {
    Table,
    Country,
    Year,
    Gdp,
}
