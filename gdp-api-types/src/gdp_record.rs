use serde::{Deserialize, Serialize};

/// Relates to the gdp table stored in gdp_db, but is a clean type
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GdpRecord {
    pub country: String,
    pub year: i32,
    pub gdp: f64,
}

impl GdpRecord {
    pub fn new(country: impl Into<String>, year: i32, gdp: f64) -> Self {
        Self {
            country: country.into(),
            year,
            gdp,
        }
    }
}
