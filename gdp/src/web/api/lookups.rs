use std::{sync::Arc, time::Duration};

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
use axum_extra::headers::{CacheControl, HeaderMapExt};
use gdp_db::RecordSource;

use crate::web::error::ApiError;

fn cached(mut response: Response) -> Response {
    response
        .headers_mut()
        .typed_insert(CacheControl::new().with_max_age(Duration::from_secs(300)));
    response
}

pub(crate) async fn countries(
    State(source): State<Arc<dyn RecordSource>>,
) -> Result<Response, ApiError> {
    let countries = source.countries().await?;
    Ok(cached(Json(countries).into_response()))
}

pub(crate) async fn years(
    State(source): State<Arc<dyn RecordSource>>,
) -> Result<Response, ApiError> {
    let years = source.year_range().await?.ok_or(ApiError::NoData)?;
    Ok(cached(Json(years).into_response()))
}
