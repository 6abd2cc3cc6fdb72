use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use gdp_api_types::ChartSpec;
use gdp_db::RecordSource;
use tracing::instrument;

use crate::{
    chart_service::build_chart,
    web::{
        error::ApiError,
        params::{CompareParams, CountryParams, TopParams},
    },
};

#[instrument(skip(source))]
pub(crate) async fn top_chart(
    State(source): State<Arc<dyn RecordSource>>,
    Query(params): Query<TopParams>,
) -> Result<Json<ChartSpec>, ApiError> {
    let years = source.year_range().await?;
    let query = params.query(years)?.ok_or(ApiError::NoData)?;
    Ok(Json(build_chart(source.as_ref(), &query).await?))
}

#[instrument(skip(source))]
pub(crate) async fn country_chart(
    State(source): State<Arc<dyn RecordSource>>,
    Query(params): Query<CountryParams>,
) -> Result<Json<ChartSpec>, ApiError> {
    Ok(Json(build_chart(source.as_ref(), &params.query()).await?))
}

#[instrument(skip(source))]
pub(crate) async fn compare_chart(
    State(source): State<Arc<dyn RecordSource>>,
    Query(params): Query<CompareParams>,
) -> Result<Json<ChartSpec>, ApiError> {
    Ok(Json(build_chart(source.as_ref(), &params.query()).await?))
}
