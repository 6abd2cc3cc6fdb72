pub(crate) mod chart;
pub(crate) mod country_select;
pub(crate) mod footer;
pub(crate) mod header;
pub(crate) mod year_select;
