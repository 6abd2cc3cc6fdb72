use gdp_api_types::GdpRecord;

use crate::entity::gdp;

impl From<gdp::Model> for GdpRecord {
    fn from(value: gdp::Model) -> Self {
        let gdp::Model { country, year, gdp } = value;
        Self { country, year, gdp }
    }
}
