pub(crate) mod compare_page;
pub(crate) mod country_page;
pub(crate) mod error_page;
pub(crate) mod top_gdp;
