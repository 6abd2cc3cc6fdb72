mod charts;
mod lookups;

pub(crate) use charts::{compare_chart, country_chart, top_chart};
pub(crate) use lookups::{countries, years};
