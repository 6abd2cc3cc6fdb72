use anyhow::Result;
use async_trait::async_trait;
use gdp_api_types::{GdpRecord, YearRange};
use itertools::Itertools;

use crate::GdpDb;

/// Read-only access to the GDP fact table.
///
/// Chart building never talks to the database directly; handlers fetch rows
/// through this trait and hand them to the builder.
#[async_trait]
pub trait RecordSource: Send + Sync {
    async fn records_for_year(&self, year: i32) -> Result<Vec<GdpRecord>>;
    async fn records_for_country(&self, country: &str) -> Result<Vec<GdpRecord>>;
    /// Distinct country names, alphabetical
    async fn countries(&self) -> Result<Vec<String>>;
    async fn year_range(&self) -> Result<Option<YearRange>>;
}

#[async_trait]
impl RecordSource for GdpDb {
    async fn records_for_year(&self, year: i32) -> Result<Vec<GdpRecord>> {
        Ok(self
            .get_records_for_year(year)
            .await?
            .into_iter()
            .map(GdpRecord::from)
            .collect())
    }

    async fn records_for_country(&self, country: &str) -> Result<Vec<GdpRecord>> {
        Ok(self
            .get_records_for_country(country)
            .await?
            .into_iter()
            .map(GdpRecord::from)
            .collect())
    }

    async fn countries(&self) -> Result<Vec<String>> {
        self.get_countries().await
    }

    async fn year_range(&self) -> Result<Option<YearRange>> {
        self.get_year_range().await
    }
}

/// Keeps every record in memory. Handy for tests and for embedding a fixed data set.
#[derive(Clone, Debug, Default)]
pub struct MemorySource {
    records: Vec<GdpRecord>,
}

impl MemorySource {
    pub fn new(records: Vec<GdpRecord>) -> Self {
        Self { records }
    }
}

#[async_trait]
impl RecordSource for MemorySource {
    async fn records_for_year(&self, year: i32) -> Result<Vec<GdpRecord>> {
        Ok(self
            .records
            .iter()
            .filter(|record| record.year == year)
            .cloned()
            .collect())
    }

    async fn records_for_country(&self, country: &str) -> Result<Vec<GdpRecord>> {
        Ok(self
            .records
            .iter()
            .filter(|record| record.country == country)
            .cloned()
            .collect())
    }

    async fn countries(&self) -> Result<Vec<String>> {
        Ok(self
            .records
            .iter()
            .map(|record| record.country.clone())
            .sorted()
            .dedup()
            .collect())
    }

    async fn year_range(&self) -> Result<Option<YearRange>> {
        Ok(self
            .records
            .iter()
            .map(|record| record.year)
            .minmax()
            .into_option()
            .map(|(min, max)| YearRange { min, max }))
    }
}

#[cfg(test)]
mod test {
    use sea_orm::{DatabaseBackend, MockDatabase};

    use super::*;
    use crate::entity::gdp;

    fn source() -> MemorySource {
        MemorySource::new(vec![
            GdpRecord::new("France", 2001, 1.4e12),
            GdpRecord::new("Germany", 2000, 1.9e12),
            GdpRecord::new("France", 2000, 1.3e12),
            GdpRecord::new("Austria", 1999, 2.1e11),
        ])
    }

    #[tokio::test]
    async fn memory_source_filters() {
        let source = source();
        assert_eq!(source.records_for_year(2000).await.unwrap().len(), 2);
        assert_eq!(source.records_for_country("France").await.unwrap().len(), 2);
        assert!(source.records_for_country("Atlantis").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn memory_source_lookups() {
        let source = source();
        assert_eq!(
            source.countries().await.unwrap(),
            ["Austria", "France", "Germany"]
        );
        assert_eq!(
            source.year_range().await.unwrap(),
            Some(YearRange {
                min: 1999,
                max: 2001
            })
        );
        assert_eq!(MemorySource::default().year_range().await.unwrap(), None);
    }

    #[tokio::test]
    async fn database_rows_become_records() {
        let connection = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![gdp::Model {
                country: "Japan".to_string(),
                year: 2015,
                gdp: 4.4e12,
            }]])
            .into_connection();
        let source: Box<dyn RecordSource> = Box::new(GdpDb::from_connection(connection));
        assert_eq!(
            source.records_for_year(2015).await.unwrap(),
            vec![GdpRecord::new("Japan", 2015, 4.4e12)]
        );
    }
}
