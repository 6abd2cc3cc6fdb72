//! Query string parameters. Everything arrives as an optional string so that a
//! blank value (`?year=`) behaves like a missing one and a malformed value gets
//! a readable error instead of a generic rejection.

use gdp_api_types::{ChartQuery, YearRange};
use serde::Deserialize;
use thiserror::Error;

pub(crate) const DEFAULT_COUNT: i64 = 10;
pub(crate) const DEFAULT_COUNTRY: &str = "Germany";
pub(crate) const DEFAULT_COMPARED_COUNTRIES: [&str; 3] = ["Germany", "China", "France"];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParamError {
    #[error("{name} must be a whole number, got {value:?}")]
    NotANumber { name: &'static str, value: String },
    #[error("count must be at least 1, got {0}")]
    CountTooSmall(i64),
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

fn parse_number<T: std::str::FromStr>(
    name: &'static str,
    value: &Option<String>,
) -> Result<Option<T>, ParamError> {
    non_blank(value)
        .map(|value| {
            value.parse().map_err(|_| ParamError::NotANumber {
                name,
                value: value.to_string(),
            })
        })
        .transpose()
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct TopParams {
    year: Option<String>,
    count: Option<String>,
}

impl TopParams {
    /// The requested year, or the newest one on record. `None` only when nothing is on record.
    pub(crate) fn year(&self, years: Option<YearRange>) -> Result<Option<i32>, ParamError> {
        Ok(parse_number("year", &self.year)?.or(years.map(|years| years.max)))
    }

    pub(crate) fn count(&self) -> Result<i64, ParamError> {
        let count = parse_number("count", &self.count)?.unwrap_or(DEFAULT_COUNT);
        if count < 1 {
            return Err(ParamError::CountTooSmall(count));
        }
        Ok(count)
    }

    pub(crate) fn query(&self, years: Option<YearRange>) -> Result<Option<ChartQuery>, ParamError> {
        let count = self.count()?;
        Ok(self
            .year(years)?
            .map(|year| ChartQuery::TopNByYear { year, count }))
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct CountryParams {
    country: Option<String>,
}

impl CountryParams {
    pub(crate) fn country(&self) -> String {
        non_blank(&self.country)
            .unwrap_or(DEFAULT_COUNTRY)
            .to_string()
    }

    pub(crate) fn query(&self) -> ChartQuery {
        ChartQuery::SingleSeries {
            country: self.country(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct CompareParams {
    country_1: Option<String>,
    country_2: Option<String>,
    country_3: Option<String>,
}

impl CompareParams {
    pub(crate) fn countries(&self) -> Vec<String> {
        [&self.country_1, &self.country_2, &self.country_3]
            .into_iter()
            .zip(DEFAULT_COMPARED_COUNTRIES)
            .map(|(country, default)| non_blank(country).unwrap_or(default).to_string())
            .collect()
    }

    pub(crate) fn query(&self) -> ChartQuery {
        ChartQuery::MultiSeries {
            countries: self.countries(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn top(year: Option<&str>, count: Option<&str>) -> TopParams {
        TopParams {
            year: year.map(str::to_string),
            count: count.map(str::to_string),
        }
    }

    const YEARS: Option<YearRange> = Some(YearRange {
        min: 1960,
        max: 2020,
    });

    #[test]
    fn top_defaults_to_newest_year_and_ten() {
        assert_eq!(
            top(None, None).query(YEARS),
            Ok(Some(ChartQuery::TopNByYear {
                year: 2020,
                count: 10
            }))
        );
        assert_eq!(
            top(Some(" "), Some("")).query(YEARS),
            Ok(Some(ChartQuery::TopNByYear {
                year: 2020,
                count: 10
            }))
        );
    }

    #[test]
    fn top_uses_requested_values() {
        assert_eq!(
            top(Some("1999"), Some("5")).query(YEARS),
            Ok(Some(ChartQuery::TopNByYear {
                year: 1999,
                count: 5
            }))
        );
    }

    #[test]
    fn top_without_data() {
        assert_eq!(top(None, Some("3")).query(None), Ok(None));
        assert_eq!(top(Some("2001"), None).year(None), Ok(Some(2001)));
    }

    #[test]
    fn top_rejects_bad_numbers() {
        assert_eq!(
            top(Some("last"), None).query(YEARS),
            Err(ParamError::NotANumber {
                name: "year",
                value: "last".to_string()
            })
        );
        assert_eq!(
            top(None, Some("2.5")).count(),
            Err(ParamError::NotANumber {
                name: "count",
                value: "2.5".to_string()
            })
        );
        assert_eq!(top(None, Some("0")).count(), Err(ParamError::CountTooSmall(0)));
        assert_eq!(top(None, Some("-4")).count(), Err(ParamError::CountTooSmall(-4)));
    }

    #[test]
    fn country_defaults() {
        assert_eq!(CountryParams::default().country(), "Germany");
        let params = CountryParams {
            country: Some(" Peru ".to_string()),
        };
        assert_eq!(
            params.query(),
            ChartQuery::SingleSeries {
                country: "Peru".to_string()
            }
        );
    }

    #[test]
    fn compare_fills_each_missing_slot() {
        assert_eq!(
            CompareParams::default().countries(),
            ["Germany", "China", "France"]
        );
        let params = CompareParams {
            country_1: None,
            country_2: Some("India".to_string()),
            country_3: Some(String::new()),
        };
        assert_eq!(params.countries(), ["Germany", "India", "France"]);
    }
}
