//! Integration tests for the HTTP surface.
//!
//! Requests go through the real router in-process using the hand-written
//! seed dataset (Lagos and Abuja only), so every expected id is fixed.

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use wakafix::api;
use wakafix::config::{Config, DatasetSource};
use wakafix::state::AppState;

fn seed_app() -> Router {
    let config = Config {
        dataset: DatasetSource::Static,
        ..Config::default()
    };
    api::router(AppState::new(config).unwrap())
}

fn generated_app() -> Router {
    api::router(AppState::new(Config::default()).unwrap())
}

async fn send(app: Router, method: Method, uri: &str) -> (StatusCode, Vec<u8>) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, bytes.to_vec())
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let (status, bytes) = send(app, Method::GET, uri).await;
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn ids(body: &Value) -> Vec<u64> {
    body["workers"]
        .as_array()
        .unwrap()
        .iter()
        .map(|w| w["id"].as_u64().unwrap())
        .collect()
}

#[tokio::test]
async fn test_root_and_health() {
    let (status, body) = get_json(seed_app(), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let (status, body) = get_json(seed_app(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["total_workers"], 8);
}

#[tokio::test]
async fn test_head_requests_are_answered() {
    let (status, body) = send(seed_app(), Method::HEAD, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_empty());

    let (status, _) = send(seed_app(), Method::HEAD, "/health").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_job_types_lists_catalog() {
    let (status, body) = get_json(seed_app(), "/job-types").await;
    assert_eq!(status, StatusCode::OK);
    let job_types = body["job_types"].as_array().unwrap();
    assert_eq!(body["total"].as_u64().unwrap() as usize, job_types.len());
    assert!(job_types.iter().any(|j| j == "Plumber"));
}

#[tokio::test]
async fn test_search_by_skill_matches_example() {
    let (status, body) = get_json(seed_app(), "/workers/search?skill=Plumber").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_found"], 2);
    assert_eq!(body["search_query"], "skill: Plumber");
    assert_eq!(body["workers"][0]["rating"], 4.5);
    assert_eq!(body["workers"][0]["verified"], true);
    assert_eq!(body["workers"][1]["rating"], 4.2);
    assert_eq!(body["workers"][1]["verified"], false);
}

#[tokio::test]
async fn test_search_without_filters_returns_all_workers() {
    let (status, body) = get_json(seed_app(), "/workers/search").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["search_query"], "all workers");
    assert_eq!(body["total_found"], 8);
    assert_eq!(ids(&body), vec![6, 2, 5, 1, 7, 3, 4, 8]);
}

#[tokio::test]
async fn test_search_combines_filters() {
    let (status, body) = get_json(
        seed_app(),
        "/workers/search?location=lagos&min_rating=4.4&verified_only=true",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec![5, 1]);
    assert_eq!(
        body["search_query"],
        "location: lagos, min_rating: 4.4, verified_only: true"
    );
}

#[tokio::test]
async fn test_search_verified_only_accepts_numeric_and_word_flags() {
    for flag in ["1", "yes", "on", "true"] {
        let uri = format!("/workers/search?location=Lagos&verified_only={flag}");
        let (status, body) = get_json(seed_app(), &uri).await;
        assert_eq!(status, StatusCode::OK, "{flag}");
        assert_eq!(ids(&body), vec![5, 1, 8], "{flag}");
    }

    let (status, body) =
        get_json(seed_app(), "/workers/search?location=Lagos&verified_only=0").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_found"], 5);

    let (status, body) = get_json(seed_app(), "/workers/search?verified_only=maybe").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation_error");
}

#[tokio::test]
async fn test_search_with_no_match_is_empty_200() {
    let (status, body) = get_json(seed_app(), "/workers/search?location=Enugu").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_found"], 0);
    assert!(body["workers"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_search_rejects_out_of_range_parameters() {
    for uri in [
        "/workers/search?min_rating=6",
        "/workers/search?min_rating=-1",
        "/workers/search?max_rate=-5",
        "/workers/search?min_experience=-1",
        "/workers/search?min_rating=high",
    ] {
        let (status, body) = get_json(seed_app(), uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body["error"], "validation_error", "{uri}");
    }
}

#[tokio::test]
async fn test_get_worker_by_id() {
    let (status, body) = get_json(seed_app(), "/workers/4").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Ngozi Eze");
    assert_eq!(body["skills"][0], body["job_type"]);
}

#[tokio::test]
async fn test_get_unknown_worker_is_404() {
    let (status, body) = get_json(seed_app(), "/workers/404").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "not_found");
    assert_eq!(body["detail"], "Worker with id 404 not found");

    let (status, _) = get_json(seed_app(), "/workers/abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_recommended_defaults_to_three() {
    let (status, body) = get_json(seed_app(), "/workers/recommended").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec![6, 2, 5]);
    assert_eq!(body["total_found"], 3);
    assert_eq!(body["search_query"], "top 3 recommended workers");
}

#[tokio::test]
async fn test_recommended_default_comes_from_config() {
    let mut config = Config {
        dataset: DatasetSource::Static,
        ..Config::default()
    };
    config.limits.recommended_default = 5;
    let app = api::router(AppState::new(config).unwrap());

    let (status, body) = get_json(app, "/workers/recommended").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec![6, 2, 5, 1, 7]);
    assert_eq!(body["search_query"], "top 5 recommended workers");
}

#[tokio::test]
async fn test_recommended_limit_bounds() {
    let (status, body) = get_json(generated_app(), "/workers/recommended?limit=10").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["workers"].as_array().unwrap().len(), 10);

    for uri in ["/workers/recommended?limit=0", "/workers/recommended?limit=11"] {
        let (status, _) = get_json(seed_app(), uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
    }
}

#[tokio::test]
async fn test_by_location() {
    let (status, body) = get_json(seed_app(), "/workers/by-location/Abuja?limit=2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec![6, 2]);
    assert_eq!(body["total_found"], 3);

    let (status, body) = get_json(seed_app(), "/workers/by-location/Enugu").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "No workers found in Enugu");
}

#[tokio::test]
async fn test_blank_lookup_keys_are_rejected() {
    for uri in ["/workers/by-location/%20", "/workers/by-job-type/%20%20"] {
        let (status, body) = get_json(seed_app(), uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body["error"], "validation_error", "{uri}");
    }
}

#[tokio::test]
async fn test_by_location_accepts_encoded_city() {
    let (status, body) = get_json(generated_app(), "/workers/by-location/Port%20Harcourt").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["workers"]
        .as_array()
        .unwrap()
        .iter()
        .all(|w| w["location"] == "Port Harcourt"));
}

#[tokio::test]
async fn test_by_job_type() {
    let (status, body) = get_json(seed_app(), "/workers/by-job-type/plumber").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec![1, 4]);

    let (status, _) = get_json(seed_app(), "/workers/by-job-type/Welder").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = get_json(seed_app(), "/workers/by-job-type/Plumber?limit=50").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_generated_search_results_are_ranked() {
    let (status, body) = get_json(generated_app(), "/workers/search?job_type=tech").await;
    assert_eq!(status, StatusCode::OK);
    let workers = body["workers"].as_array().unwrap();
    assert!(!workers.is_empty());
    for pair in workers.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        let (ra, rb) = (a["rating"].as_f64().unwrap(), b["rating"].as_f64().unwrap());
        assert!(ra >= rb);
        if ra == rb {
            assert!(a["verified"] == true || b["verified"] == false);
        }
    }
}
