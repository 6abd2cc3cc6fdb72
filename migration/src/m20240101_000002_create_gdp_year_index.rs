use sea_orm_migration::prelude::*;

use crate::m20240101_000001_create_gdp_table::Gdp;

#[derive(DeriveMigrationName)]
pub struct Migration;

const INDEX_NAME: &str = "gdp_year_gdp_desc";

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // top-n queries filter by year and read the largest values first
        manager
            .create_index(
                IndexCreateStatement::new()
                    .name(INDEX_NAME)
                    .table(Gdp::Table)
                    .col(Gdp::Year)
                    .col((Gdp::Gdp, IndexOrder::Desc))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name(INDEX_NAME).table(Gdp::Table).to_owned())
            .await
    }
}
