use axum::body::Body;
use axum::extract::Path;
use axum::http::{header, HeaderValue, Response, StatusCode};
use axum::response::IntoResponse;

use crate::web::error::WebError;

/// In release mode, return the files from a statically included dir
#[cfg(not(debug_assertions))]
fn get_static_file(path: &str) -> Option<&'static [u8]> {
    use include_dir::include_dir;
    static STATIC_DIR: include_dir::Dir = include_dir!("$CARGO_MANIFEST_DIR/static");
    let file = STATIC_DIR.get_file(path)?;
    Some(file.contents())
}

/// In debug mode, read straight from the crate's static dir so edits show up without a rebuild
#[cfg(debug_assertions)]
fn get_static_file(path: &str) -> Option<Vec<u8>> {
    use std::path::{Component, PathBuf};

    let path = PathBuf::from(path);
    if path
        .components()
        .any(|component| !matches!(component, Component::Normal(_)))
    {
        return None;
    }
    std::fs::read(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("static").join(path)).ok()
}

const CACHE_CONTROL: &str = if cfg!(debug_assertions) {
    "no-cache"
} else {
    "public, max-age=86400"
};

async fn get_file(path: &str) -> Result<Response<Body>, WebError> {
    let Some(file) = get_static_file(path) else {
        return Ok(Response::builder()
            .status(StatusCode::NOT_FOUND)
            .body(Body::new(http_body_util::Empty::new()))?);
    };
    let mime_type = mime_guess::from_path(path).first_or_text_plain();
    Ok(Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, mime_type.as_ref())
        .header(header::CACHE_CONTROL, HeaderValue::from_static(CACHE_CONTROL))
        .body(Body::new(http_body_util::Full::from(file)))?)
}

pub(crate) async fn static_path(Path(path): Path<String>) -> impl IntoResponse {
    let path = path.trim_start_matches('/');
    get_file(path).await
}
