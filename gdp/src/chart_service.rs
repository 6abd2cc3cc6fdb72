use futures::future::try_join_all;
use gdp_api_types::{
    ChartKind, ChartQuery, ChartSpec, GdpRecord, LabelOrientation, ValueFormat,
};
use gdp_charts::ChartError;
use gdp_db::RecordSource;
use itertools::Itertools;
use thiserror::Error;
use tracing::{debug, instrument};

#[derive(Debug, Error)]
pub(crate) enum ChartServiceError {
    #[error(transparent)]
    Chart(#[from] ChartError),
    #[error("Failed to load GDP records {0}")]
    Source(#[from] anyhow::Error),
}

/// A chart ready to be rendered, possibly a placeholder
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ChartView {
    pub(crate) spec: ChartSpec,
    /// Set when there was nothing to chart
    pub(crate) notice: Option<String>,
}

pub(crate) fn multi_series_title(countries: &[String]) -> String {
    format!("GDP: {}", countries.join(", "))
}

/// Fetches the rows `query` needs and builds its chart.
#[instrument(skip(source))]
pub(crate) async fn build_chart(
    source: &dyn RecordSource,
    query: &ChartQuery,
) -> Result<ChartSpec, ChartServiceError> {
    let spec = match query {
        ChartQuery::TopNByYear { year, .. } => {
            let records = source.records_for_year(*year).await?;
            gdp_charts::build(query, &records)?
        }
        ChartQuery::SingleSeries { country } => {
            let records = source.records_for_country(country).await?;
            gdp_charts::build(query, &records)?
        }
        ChartQuery::MultiSeries { countries } => {
            // a country asked for twice is only fetched once
            let records: Vec<GdpRecord> = try_join_all(
                countries
                    .iter()
                    .unique()
                    .map(|country| source.records_for_country(country)),
            )
            .await?
            .into_iter()
            .flatten()
            .collect();
            gdp_charts::build(query, &records)?.with_title(multi_series_title(countries))
        }
    };
    debug!("built chart with {} series", spec.series.len());
    Ok(spec)
}

/// Empty chart carrying the same title and layout the real one would have had
pub(crate) fn placeholder(query: &ChartQuery) -> ChartSpec {
    let (title, kind, x_label_orientation) = match query {
        ChartQuery::TopNByYear { year, count } => (
            format!("Top {count} GDPs ({year})"),
            ChartKind::Bar,
            LabelOrientation::Diagonal,
        ),
        ChartQuery::SingleSeries { country } => (
            format!("{country} GDP"),
            ChartKind::Line,
            LabelOrientation::Horizontal,
        ),
        ChartQuery::MultiSeries { countries } => (
            multi_series_title(countries),
            ChartKind::Line,
            LabelOrientation::Horizontal,
        ),
    };
    ChartSpec {
        title: Some(title),
        kind,
        series: vec![],
        tooltip_fields: vec![],
        y_format: ValueFormat::CurrencyAbbreviated,
        x_label_orientation,
    }
}

/// Like [`build_chart`], but a query without matching records turns into a
/// placeholder chart instead of an error.
pub(crate) async fn chart_view(
    source: &dyn RecordSource,
    query: &ChartQuery,
) -> Result<ChartView, ChartServiceError> {
    match build_chart(source, query).await {
        Ok(spec) => Ok(ChartView { spec, notice: None }),
        Err(ChartServiceError::Chart(ChartError::EmptyResult(what))) => Ok(ChartView {
            spec: placeholder(query),
            notice: Some(format!("No GDP data for {what}")),
        }),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod test {
    use gdp_api_types::XValues;
    use gdp_db::MemorySource;

    use super::*;

    fn source() -> MemorySource {
        MemorySource::new(vec![
            GdpRecord::new("Germany", 2019, 3.9e12),
            GdpRecord::new("Germany", 2020, 3.8e12),
            GdpRecord::new("France", 2020, 2.6e12),
            GdpRecord::new("China", 2018, 13.9e12),
            GdpRecord::new("China", 2020, 14.7e12),
        ])
    }

    #[tokio::test]
    async fn top_n_only_reads_the_requested_year() {
        let query = ChartQuery::TopNByYear {
            year: 2020,
            count: 2,
        };
        let spec = build_chart(&source(), &query).await.unwrap();
        assert_eq!(
            spec.series[0].x,
            XValues::Categories(vec!["China".to_string(), "Germany".to_string()])
        );
    }

    #[tokio::test]
    async fn multi_series_is_titled_with_every_country() {
        let query = ChartQuery::MultiSeries {
            countries: vec![
                "Germany".to_string(),
                "China".to_string(),
                "France".to_string(),
            ],
        };
        let spec = build_chart(&source(), &query).await.unwrap();
        assert_eq!(spec.title.as_deref(), Some("GDP: Germany, China, France"));
        assert_eq!(spec.series[1].x, XValues::Years(vec![2018, 2020]));
        assert_eq!(spec.series[2].len(), 1);
    }

    #[tokio::test]
    async fn duplicate_countries_are_charted_twice() {
        let query = ChartQuery::MultiSeries {
            countries: vec!["France".to_string(), "France".to_string()],
        };
        let spec = build_chart(&source(), &query).await.unwrap();
        assert_eq!(spec.series.len(), 2);
        assert_eq!(spec.series[0].y, spec.series[1].y);
        assert_eq!(spec.series[0].len(), 1);
    }

    #[tokio::test]
    async fn empty_results_become_placeholders() {
        let query = ChartQuery::SingleSeries {
            country: "Atlantis".to_string(),
        };
        let view = chart_view(&source(), &query).await.unwrap();
        assert!(view.spec.is_empty());
        assert_eq!(view.spec.title.as_deref(), Some("Atlantis GDP"));
        assert_eq!(view.notice.as_deref(), Some("No GDP data for country Atlantis"));
    }

    #[tokio::test]
    async fn invalid_parameters_stay_errors() {
        let query = ChartQuery::TopNByYear {
            year: 2020,
            count: 0,
        };
        assert!(matches!(
            chart_view(&source(), &query).await,
            Err(ChartServiceError::Chart(ChartError::InvalidParameter { .. }))
        ));
    }
}
