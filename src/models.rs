use chrono::{DateTime, Utc};
use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt;

/// A single entry in the worker directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Worker {
    pub id: u32,
    pub name: String,
    pub location: String,
    pub availability: String,
    pub rating: f64,
    pub hourly_rate: f64,
    /// Always starts with `job_type`
    pub skills: Vec<String>,
    pub experience_years: u32,
    pub description: String,
    pub job_type: String,
    pub contact: String,
    pub verified: bool,
}

/// Query parameters accepted by `GET /workers/search`.
///
/// Numeric bounds are kept signed so that out-of-range values reach
/// validation instead of failing deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchParams {
    pub location: Option<String>,
    pub skill: Option<String>,
    pub job_type: Option<String>,
    pub min_rating: Option<f64>,
    pub max_rate: Option<f64>,
    pub min_experience: Option<i64>,
    /// Accepts `true/false`, `1/0`, `yes/no` and `on/off`, case-insensitively.
    #[serde(default, deserialize_with = "flexible_bool")]
    pub verified_only: bool,
}

fn flexible_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    struct FlexibleBool;

    impl de::Visitor<'_> for FlexibleBool {
        type Value = bool;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("one of true/false, 1/0, yes/no, on/off")
        }

        fn visit_bool<E: de::Error>(self, v: bool) -> Result<bool, E> {
            Ok(v)
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<bool, E> {
            match v.trim().to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" | "on" => Ok(true),
                "false" | "0" | "no" | "off" => Ok(false),
                _ => Err(E::invalid_value(de::Unexpected::Str(v), &self)),
            }
        }
    }

    deserializer.deserialize_any(FlexibleBool)
}

/// `?limit=` for the recommended and listing endpoints
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LimitParams {
    pub limit: Option<i64>,
}

/// Result envelope shared by every listing endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub workers: Vec<Worker>,
    pub total_found: usize,
    pub search_query: String,
}

/// `GET /`
#[derive(Debug, Clone, Serialize)]
pub struct ServiceInfo {
    pub message: String,
    pub status: String,
    pub version: String,
    pub endpoints: Vec<String>,
}

/// `GET /health`
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub total_workers: usize,
    pub timestamp: DateTime<Utc>,
}

/// `GET /job-types`
#[derive(Debug, Clone, Serialize)]
pub struct JobTypesResponse {
    pub job_types: Vec<String>,
    pub total: usize,
}
