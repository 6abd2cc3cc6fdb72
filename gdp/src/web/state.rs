use std::sync::Arc;

use axum::extract::FromRef;
use gdp_db::RecordSource;

#[derive(Clone)]
pub(crate) struct WebState {
    pub(crate) source: Arc<dyn RecordSource>,
}

impl FromRef<WebState> for Arc<dyn RecordSource> {
    fn from_ref(input: &WebState) -> Self {
        input.source.clone()
    }
}
