use std::{convert::Infallible, iter};

use axum::{
    extract::FromRequestParts,
    http::{request::Parts, HeaderName, HeaderValue},
};
use axum_extra::headers::{self, Header, HeaderMapExt};

/// `HX-Request: true`, sent by htmx on every request it issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct HxRequest;

pub(crate) static HX_REQUEST: HeaderName = HeaderName::from_static("hx-request");

impl Header for HxRequest {
    fn name() -> &'static HeaderName {
        &HX_REQUEST
    }

    fn decode<'i, I>(values: &mut I) -> Result<Self, headers::Error>
    where
        Self: Sized,
        I: Iterator<Item = &'i HeaderValue>,
    {
        values
            .next()
            .filter(|value| value.as_bytes().eq_ignore_ascii_case(b"true"))
            .map(|_| HxRequest)
            .ok_or_else(headers::Error::invalid)
    }

    fn encode<E: Extend<HeaderValue>>(&self, values: &mut E) {
        values.extend(iter::once(HeaderValue::from_static("true")));
    }
}

/// Whether a page handler should answer with the whole document or just the
/// fragment htmx swaps in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum Layout {
    #[default]
    FullPage,
    Partial,
}

impl<S: Send + Sync> FromRequestParts<S> for Layout {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(match parts.headers.typed_get::<HxRequest>() {
            Some(HxRequest) => Layout::Partial,
            None => Layout::FullPage,
        })
    }
}
