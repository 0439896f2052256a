use axum::extract::State;
use axum::Json;
use chrono::Utc;

use crate::api::ENDPOINTS;
use crate::models::{HealthResponse, JobTypesResponse, ServiceInfo};
use crate::state::AppState;

/// GET/HEAD / - Service metadata
pub async fn root() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        message: "WakaFix worker directory".to_string(),
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        endpoints: ENDPOINTS.iter().map(|e| e.to_string()).collect(),
    })
}

/// GET/HEAD /health - Liveness plus collection size
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        total_workers: state.directory.snapshot().len(),
        timestamp: Utc::now(),
    })
}

/// GET /job-types - Job-type catalog
pub async fn job_types(State(state): State<AppState>) -> Json<JobTypesResponse> {
    let directory = state.directory.snapshot();
    let job_types = directory.job_types().to_vec();
    Json(JobTypesResponse {
        total: job_types.len(),
        job_types,
    })
}
