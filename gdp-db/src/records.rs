use std::time::Instant;

use anyhow::Result;
use gdp_api_types::YearRange;
use metrics::histogram;
use sea_orm::{
    ColumnTrait, EntityTrait, FromQueryResult, QueryFilter, QueryOrder, QuerySelect,
};
use tracing::instrument;

use crate::{entity::gdp, GdpDb};

#[derive(Debug, FromQueryResult)]
struct YearBounds {
    min_year: Option<i32>,
    max_year: Option<i32>,
}

fn record_duration(query: &'static str, start: Instant) {
    histogram!("gdp_db_query_duration_seconds", "query" => query).record(start.elapsed().as_secs_f64());
}

impl GdpDb {
    /// Every country's gdp for the given year, largest first.
    #[instrument(skip(self))]
    pub async fn get_records_for_year(&self, year: i32) -> Result<Vec<gdp::Model>> {
        let start = Instant::now();
        let records = gdp::Entity::find()
            .filter(gdp::Column::Year.eq(year))
            .order_by_desc(gdp::Column::Gdp)
            .all(&self.db)
            .await?;
        record_duration("records_for_year", start);
        Ok(records)
    }

    /// Every year on record for a country, oldest first. Requires an exact name match
    #[instrument(skip(self))]
    pub async fn get_records_for_country(&self, country: &str) -> Result<Vec<gdp::Model>> {
        let start = Instant::now();
        let records = gdp::Entity::find()
            .filter(gdp::Column::Country.eq(country))
            .order_by_asc(gdp::Column::Year)
            .all(&self.db)
            .await?;
        record_duration("records_for_country", start);
        Ok(records)
    }

    #[instrument(skip(self))]
    pub async fn get_countries(&self) -> Result<Vec<String>> {
        let start = Instant::now();
        let countries = gdp::Entity::find()
            .select_only()
            .column(gdp::Column::Country)
            .distinct()
            .order_by_asc(gdp::Column::Country)
            .into_tuple::<String>()
            .all(&self.db)
            .await?;
        record_duration("countries", start);
        Ok(countries)
    }

    /// `None` while the table is still empty
    #[instrument(skip(self))]
    pub async fn get_year_range(&self) -> Result<Option<YearRange>> {
        let start = Instant::now();
        let bounds = gdp::Entity::find()
            .select_only()
            .column_as(gdp::Column::Year.min(), "min_year")
            .column_as(gdp::Column::Year.max(), "max_year")
            .into_model::<YearBounds>()
            .one(&self.db)
            .await?;
        record_duration("year_range", start);
        Ok(bounds.and_then(|bounds| match bounds {
            YearBounds {
                min_year: Some(min),
                max_year: Some(max),
            } => Some(YearRange { min, max }),
            _ => None,
        }))
    }
}
