use serde::{Deserialize, Serialize};

/// Describes which chart should be built.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "kebab-case")]
pub enum ChartQuery {
    /// The `count` largest economies of a single year.
    TopNByYear { year: i32, count: i64 },
    /// Every year on record for one country.
    SingleSeries { country: String },
    /// One line per country, in the order given. Duplicates are kept.
    MultiSeries { countries: Vec<String> },
}
