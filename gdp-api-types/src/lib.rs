mod gdp_record;
mod year_range;

pub mod chart;
pub mod query;
pub mod result;

pub use chart::{
    ChartKind, ChartSpec, FieldRef, LabelOrientation, Series, TooltipField, ValueFormat, XValues,
};
pub use gdp_record::GdpRecord;
pub use query::ChartQuery;
pub use year_range::YearRange;
