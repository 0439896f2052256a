use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::Json;

use crate::directory::filter::{resolve_limit, SearchFilters};
use crate::error::ApiError;
use crate::models::{LimitParams, SearchParams, SearchResponse, Worker};
use crate::state::AppState;

/// GET /workers/search - Filter, rank, and describe. An empty result is
/// still a 200.
pub async fn search(
    State(state): State<AppState>,
    query: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<SearchResponse>, ApiError> {
    let Query(params) = query?;
    let filters = SearchFilters::from_params(&params)?;
    let response = state.directory.snapshot().search(&filters);
    tracing::debug!(
        query = %response.search_query,
        total_found = response.total_found,
        "worker search"
    );
    Ok(Json(response))
}

/// GET /workers/:id
pub async fn get_worker(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Worker>, ApiError> {
    let id: u32 = id
        .parse()
        .map_err(|_| ApiError::BadRequest(format!("Invalid worker id '{id}'")))?;
    let directory = state.directory.snapshot();
    let worker = directory.get_by_id(id)?;
    Ok(Json(worker.clone()))
}

/// GET /workers/recommended?limit=
pub async fn recommended(
    State(state): State<AppState>,
    query: Result<Query<LimitParams>, QueryRejection>,
) -> Result<Json<SearchResponse>, ApiError> {
    let Query(params) = query?;
    let limits = &state.config.limits;
    let limit = resolve_limit(
        params.limit,
        limits.recommended_default,
        limits.recommended_max,
    )?;
    Ok(Json(state.directory.snapshot().recommended(limit)?))
}

/// GET /workers/by-location/:city?limit=
pub async fn by_location(
    State(state): State<AppState>,
    Path(city): Path<String>,
    query: Result<Query<LimitParams>, QueryRejection>,
) -> Result<Json<SearchResponse>, ApiError> {
    let Query(params) = query?;
    let limits = &state.config.limits;
    let limit = resolve_limit(params.limit, limits.listing_default, limits.listing_max)?;
    let response = state.directory.snapshot().by_location(&city, limit)?;
    tracing::debug!(%city, total_found = response.total_found, "workers by location");
    Ok(Json(response))
}

/// GET /workers/by-job-type/:job_type?limit=
pub async fn by_job_type(
    State(state): State<AppState>,
    Path(job_type): Path<String>,
    query: Result<Query<LimitParams>, QueryRejection>,
) -> Result<Json<SearchResponse>, ApiError> {
    let Query(params) = query?;
    let limits = &state.config.limits;
    let limit = resolve_limit(params.limit, limits.listing_default, limits.listing_max)?;
    let response = state.directory.snapshot().by_job_type(&job_type, limit)?;
    tracing::debug!(%job_type, total_found = response.total_found, "workers by job type");
    Ok(Json(response))
}
