use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Html,
    routing::get,
    Json, Router,
};
use dashboard_api::{
    dashboard_layout, display_result, display_wins,
    layout::{CHOROPLETH_MAP_ROUTE, COUNTRY_WINS_ROUTE, YEAR_RESULT_ROUTE},
    update_choropleth,
};
use serde::Deserialize;
use shared::{
    domain::Year,
    error::{ApiError, ErrorCode},
    protocol::{ChoroplethFigure, WinsResponse, YearResultResponse},
};
use tower_http::trace::TraceLayer;
use tracing::{debug, error};

use crate::{app_state::AppState, config::RunMode, page::render_page};

type HttpError = (StatusCode, Json<ApiError>);

#[derive(Debug, Deserialize)]
struct CountryQuery {
    country: Option<String>,
}

#[derive(Debug, Deserialize)]
struct YearQuery {
    year: Option<String>,
}

pub(crate) fn build_router(state: Arc<AppState>) -> Router {
    let router = Router::new()
        .route("/", get(index))
        .route(COUNTRY_WINS_ROUTE, get(country_wins))
        .route(YEAR_RESULT_ROUTE, get(year_result))
        .route(CHOROPLETH_MAP_ROUTE, get(choropleth_map));

    let router = match state.run_mode {
        RunMode::Debug => router.layer(TraceLayer::new_for_http()),
        RunMode::Production => router,
    };
    router.with_state(state)
}

async fn index(State(state): State<Arc<AppState>>) -> Result<Html<String>, HttpError> {
    let layout = dashboard_layout(&state.dashboard);
    render_page(&layout).map(Html).map_err(|e| {
        error!(error = %e, "failed to render dashboard page");
        http_error(ApiError::new(ErrorCode::Internal, e.to_string()))
    })
}

async fn country_wins(
    State(state): State<Arc<AppState>>,
    Query(q): Query<CountryQuery>,
) -> Result<Json<WinsResponse>, HttpError> {
    let country = q
        .country
        .ok_or_else(|| http_error(ApiError::validation("missing 'country' parameter")))?;
    Ok(Json(display_wins(&state.dashboard, &country)))
}

async fn year_result(
    State(state): State<Arc<AppState>>,
    Query(q): Query<YearQuery>,
) -> Result<Json<YearResultResponse>, HttpError> {
    let year = parse_year(q.year.as_deref()).map_err(http_error)?;
    display_result(&state.dashboard, year)
        .map(Json)
        .map_err(http_error)
}

async fn choropleth_map(
    State(state): State<Arc<AppState>>,
    Query(q): Query<YearQuery>,
) -> Result<Json<ChoroplethFigure>, HttpError> {
    let year = parse_year(q.year.as_deref()).map_err(http_error)?;
    update_choropleth(&state.dashboard, year)
        .map(Json)
        .map_err(http_error)
}

fn parse_year(raw: Option<&str>) -> Result<Year, ApiError> {
    let raw = raw.ok_or_else(|| ApiError::validation("missing 'year' parameter"))?;
    raw.trim()
        .parse::<i32>()
        .map(Year)
        .map_err(|_| ApiError::validation(format!("'{raw}' is not a year")))
}

fn http_error(err: ApiError) -> HttpError {
    let status = match err.code {
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::Validation => StatusCode::BAD_REQUEST,
        ErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    };
    debug!(%status, message = %err.message, "callback rejected");
    (status, Json(err))
}

#[cfg(test)]
#[path = "tests/mod_tests.rs"]
mod tests;
