mod api;
pub mod error;
mod htmx;
mod params;
mod state;
mod static_content;
mod templates;

use std::{net::SocketAddr, sync::Arc};

use axum::{
    extract::{Query, State},
    middleware,
    routing::get,
    Router,
};
use gdp_db::RecordSource;
use tower_http::trace::TraceLayer;
use tracing::{info, instrument};

pub(crate) use self::state::WebState;

use self::{
    error::WebError,
    htmx::Layout,
    params::{CompareParams, CountryParams, TopParams},
    static_content::static_path,
    templates::{
        components::chart::ChartFigure,
        page::RenderPage,
        pages::{compare_page::ComparePage, country_page::CountryPage, top_gdp::TopGdpPage},
    },
};
use crate::{chart_service::chart_view, web_metrics::track_metrics};

#[instrument(skip(source))]
async fn top_gdps(
    State(source): State<Arc<dyn RecordSource>>,
    Query(params): Query<TopParams>,
    layout: Layout,
) -> Result<RenderPage<TopGdpPage>, WebError> {
    let years = source.year_range().await?;
    let chart = match params.query(years)? {
        Some(query) => Some(ChartFigure::new(chart_view(source.as_ref(), &query).await?)?),
        None => None,
    };
    Ok(RenderPage::new(
        TopGdpPage {
            years,
            year: params.year(years)?,
            count: params.count()?,
            chart,
        },
        layout,
    ))
}

#[instrument(skip(source))]
async fn country_gdp(
    State(source): State<Arc<dyn RecordSource>>,
    Query(params): Query<CountryParams>,
    layout: Layout,
) -> Result<RenderPage<CountryPage>, WebError> {
    let view = chart_view(source.as_ref(), &params.query()).await?;
    Ok(RenderPage::new(
        CountryPage {
            countries: source.countries().await?,
            country: params.country(),
            chart: ChartFigure::new(view)?,
        },
        layout,
    ))
}

#[instrument(skip(source))]
async fn compare_gdp(
    State(source): State<Arc<dyn RecordSource>>,
    Query(params): Query<CompareParams>,
    layout: Layout,
) -> Result<RenderPage<ComparePage>, WebError> {
    let view = chart_view(source.as_ref(), &params.query()).await?;
    Ok(RenderPage::new(
        ComparePage {
            countries: source.countries().await?,
            selected: params.countries(),
            chart: ChartFigure::new(view)?,
        },
        layout,
    ))
}

async fn fallback() -> WebError {
    WebError::NotFound
}

pub(crate) fn router(state: WebState) -> Router {
    Router::new()
        .route("/", get(top_gdps))
        .route("/country", get(country_gdp))
        .route("/compare", get(compare_gdp))
        .route("/api/charts/top", get(api::top_chart))
        .route("/api/charts/country", get(api::country_chart))
        .route("/api/charts/compare", get(api::compare_chart))
        .route("/api/countries", get(api::countries))
        .route("/api/years", get(api::years))
        .route("/static/{*path}", get(static_path))
        .fallback(fallback)
        .layer(middleware::from_fn(track_metrics))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub(crate) async fn start_web(state: WebState, port: u16) -> anyhow::Result<()> {
    let app = router(state);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("listening on {addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
