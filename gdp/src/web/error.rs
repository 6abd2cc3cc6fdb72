use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use gdp_api_types::result::JsonError;
use gdp_charts::ChartError;
use thiserror::Error;
use tracing::error;

use super::{
    params::ParamError,
    templates::{page::RenderPage, pages::error_page::ErrorPage},
};
use crate::chart_service::ChartServiceError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    InvalidParameter(#[from] ParamError),
    #[error("{0}")]
    Chart(ChartError),
    #[error("No GDP data has been loaded")]
    NoData,
    #[error("Generic error {0}")]
    AnyhowError(#[from] anyhow::Error),
}

impl From<ChartServiceError> for ApiError {
    fn from(value: ChartServiceError) -> Self {
        match value {
            ChartServiceError::Chart(e) => ApiError::Chart(e),
            ChartServiceError::Source(e) => ApiError::AnyhowError(e),
        }
    }
}

impl ApiError {
    fn as_status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidParameter(_) | ApiError::Chart(ChartError::InvalidParameter { .. }) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Chart(ChartError::EmptyResult(_)) | ApiError::NoData => {
                StatusCode::NOT_FOUND
            }
            ApiError::AnyhowError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.as_status_code();
        if status.is_server_error() {
            error!("error {}", self);
        }
        let e = format!("{self}");

        (status, Json(JsonError { error_message: e })).into_response()
    }
}

#[derive(Debug, Error)]
pub enum WebError {
    #[error("{0}")]
    InvalidParameter(#[from] ParamError),
    #[error("{0}")]
    Chart(ChartError),
    #[error("Page not found")]
    NotFound,
    #[error("Generic error {0}")]
    AnyhowError(#[from] anyhow::Error),
    #[error("Internal HTTP Error {0}")]
    AxumError(#[from] axum::http::Error),
}

impl From<ChartServiceError> for WebError {
    fn from(value: ChartServiceError) -> Self {
        match value {
            ChartServiceError::Chart(e) => WebError::Chart(e),
            ChartServiceError::Source(e) => WebError::AnyhowError(e),
        }
    }
}

impl WebError {
    fn as_status_code(&self) -> StatusCode {
        match self {
            WebError::InvalidParameter(_) | WebError::Chart(ChartError::InvalidParameter { .. }) => {
                StatusCode::BAD_REQUEST
            }
            WebError::NotFound | WebError::Chart(ChartError::EmptyResult(_)) => {
                StatusCode::NOT_FOUND
            }
            WebError::AnyhowError(_) | WebError::AxumError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status = self.as_status_code();
        let message = if status.is_server_error() {
            error!("Error returned {self:?}");
            // don't leak database errors into the page
            "Server error has occurred".to_string()
        } else {
            self.to_string()
        };
        (status, RenderPage::full(ErrorPage { status, message })).into_response()
    }
}
