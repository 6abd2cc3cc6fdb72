//! Turns GDP records into chart specifications.
//!
//! Every function here is pure: it only looks at the records it is handed and
//! returns the same [`ChartSpec`] for the same input.

use gdp_api_types::{
    ChartKind, ChartQuery, ChartSpec, FieldRef, GdpRecord, LabelOrientation, Series, TooltipField,
    ValueFormat,
};
use itertools::Itertools;
use thiserror::Error;

use crate::palette;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChartError {
    #[error("No GDP records found for {0}")]
    EmptyResult(String),
    #[error("Invalid value for {name}: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

/// Records that can actually be plotted
fn plottable(records: &[GdpRecord]) -> impl Iterator<Item = &GdpRecord> {
    records.iter().filter(|record| record.gdp.is_finite())
}

/// Bar chart of the `count` largest economies in `year`.
///
/// Equal GDPs are ordered by country name.
pub fn build_top_n(records: &[GdpRecord], year: i32, count: i64) -> Result<ChartSpec, ChartError> {
    let limit = usize::try_from(count)
        .ok()
        .filter(|count| *count > 0)
        .ok_or_else(|| ChartError::InvalidParameter {
            name: "count",
            reason: format!("must be at least 1, got {count}"),
        })?;
    let ranked: Vec<&GdpRecord> = plottable(records)
        .filter(|record| record.year == year)
        .sorted_by(|a, b| {
            b.gdp
                .total_cmp(&a.gdp)
                .then_with(|| a.country.cmp(&b.country))
        })
        .collect();
    if ranked.is_empty() {
        return Err(ChartError::EmptyResult(format!("year {year}")));
    }
    let series = Series::categories(
        ranked
            .into_iter()
            .take(limit)
            .map(|record| (record.country.clone(), record.gdp)),
    );
    Ok(ChartSpec {
        title: Some(format!("Top {count} GDPs ({year})")),
        kind: ChartKind::Bar,
        series: vec![series],
        tooltip_fields: vec![
            TooltipField::new("Country", FieldRef::Category),
            TooltipField::new("GDP", FieldRef::Y),
        ],
        y_format: ValueFormat::CurrencyAbbreviated,
        x_label_orientation: LabelOrientation::Diagonal,
    })
}

fn country_series(records: &[GdpRecord], country: &str) -> Series {
    Series::years(
        plottable(records)
            .filter(|record| record.country == country)
            .sorted_by_key(|record| record.year)
            .map(|record| (record.year, record.gdp)),
    )
}

/// Line chart of every year on record for `country`.
pub fn build_single_series(records: &[GdpRecord], country: &str) -> Result<ChartSpec, ChartError> {
    let series = country_series(records, country);
    if series.is_empty() {
        return Err(ChartError::EmptyResult(format!("country {country}")));
    }
    Ok(ChartSpec {
        title: Some(format!("{country} GDP")),
        kind: ChartKind::Line,
        series: vec![series],
        tooltip_fields: vec![
            TooltipField::new("Year", FieldRef::X),
            TooltipField::new("GDP", FieldRef::Y),
        ],
        y_format: ValueFormat::CurrencyAbbreviated,
        x_label_orientation: LabelOrientation::Horizontal,
    })
}

/// One line per requested country, in the order requested.
///
/// A country without records gets an empty series instead of an error, and
/// each series keeps its own years. The title is left to the caller.
pub fn build_multi_series<S>(records: &[GdpRecord], countries: &[S]) -> Result<ChartSpec, ChartError>
where
    S: AsRef<str>,
{
    if countries.is_empty() {
        return Err(ChartError::InvalidParameter {
            name: "countries",
            reason: "at least one country is required".to_string(),
        });
    }
    let series = countries
        .iter()
        .enumerate()
        .map(|(position, country)| {
            let country = country.as_ref();
            country_series(records, country)
                .with_name(country)
                .with_color(palette::color_for(position))
        })
        .collect();
    Ok(ChartSpec {
        title: None,
        kind: ChartKind::Line,
        series,
        tooltip_fields: vec![
            TooltipField::new("Country", FieldRef::SeriesName),
            TooltipField::new("Year", FieldRef::X),
            TooltipField::new("GDP", FieldRef::Y),
        ],
        y_format: ValueFormat::CurrencyAbbreviated,
        x_label_orientation: LabelOrientation::Horizontal,
    })
}

pub fn build(query: &ChartQuery, records: &[GdpRecord]) -> Result<ChartSpec, ChartError> {
    match query {
        ChartQuery::TopNByYear { year, count } => build_top_n(records, *year, *count),
        ChartQuery::SingleSeries { country } => build_single_series(records, country),
        ChartQuery::MultiSeries { countries } => build_multi_series(records, countries),
    }
}
