pub mod meta;
pub mod workers;

use axum::routing::get;
use axum::Router;

use crate::state::AppState;

/// Every route the service exposes. `get` also answers `HEAD`.
pub const ENDPOINTS: &[&str] = &[
    "/",
    "/health",
    "/job-types",
    "/workers/search",
    "/workers/recommended",
    "/workers/{id}",
    "/workers/by-location/{city}",
    "/workers/by-job-type/{job_type}",
];

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(meta::root))
        .route("/health", get(meta::health))
        .route("/job-types", get(meta::job_types))
        .route("/workers/search", get(workers::search))
        .route("/workers/recommended", get(workers::recommended))
        .route("/workers/{id}", get(workers::get_worker))
        .route("/workers/by-location/{city}", get(workers::by_location))
        .route("/workers/by-job-type/{job_type}", get(workers::by_job_type))
        .with_state(state)
}
