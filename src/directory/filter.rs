use crate::error::DirectoryError;
use crate::models::{SearchParams, Worker};

pub const MAX_RATING: f64 = 5.0;

/// Description used when a search carries no filter at all.
pub const ALL_WORKERS: &str = "all workers";

/// Case-insensitive substring filter. Keeps the caller's spelling for the
/// query description.
#[derive(Debug, Clone, PartialEq)]
struct TextFilter {
    raw: String,
    needle: String,
}

impl TextFilter {
    /// Blank input counts as "not supplied".
    fn new(value: Option<&str>) -> Option<Self> {
        let raw = value?.trim();
        if raw.is_empty() {
            return None;
        }
        Some(Self {
            raw: raw.to_string(),
            needle: raw.to_lowercase(),
        })
    }

    fn matches(&self, haystack: &str) -> bool {
        haystack.to_lowercase().contains(&self.needle)
    }
}

/// Validated set of search predicates, combined with logical AND.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchFilters {
    location: Option<TextFilter>,
    skill: Option<TextFilter>,
    job_type: Option<TextFilter>,
    min_rating: Option<f64>,
    max_rate: Option<f64>,
    min_experience: Option<u32>,
    verified_only: bool,
}

impl SearchFilters {
    /// Validate raw query parameters. Range violations are rejected here,
    /// before any worker is looked at.
    pub fn from_params(params: &SearchParams) -> Result<Self, DirectoryError> {
        if let Some(rating) = params.min_rating {
            if !(0.0..=MAX_RATING).contains(&rating) {
                return Err(DirectoryError::Validation(format!(
                    "min_rating must be between 0 and {MAX_RATING}, got {rating}"
                )));
            }
        }
        if let Some(rate) = params.max_rate {
            if rate.is_nan() || rate < 0.0 {
                return Err(DirectoryError::Validation(format!(
                    "max_rate must be non-negative, got {rate}"
                )));
            }
        }
        let min_experience = match params.min_experience {
            Some(years) => Some(u32::try_from(years).map_err(|_| {
                DirectoryError::Validation(format!(
                    "min_experience must be a non-negative integer, got {years}"
                ))
            })?),
            None => None,
        };

        Ok(Self {
            location: TextFilter::new(params.location.as_deref()),
            skill: TextFilter::new(params.skill.as_deref()),
            job_type: TextFilter::new(params.job_type.as_deref()),
            min_rating: params.min_rating,
            max_rate: params.max_rate,
            min_experience,
            verified_only: params.verified_only,
        })
    }

    pub fn location(mut self, value: &str) -> Self {
        self.location = TextFilter::new(Some(value));
        self
    }

    pub fn skill(mut self, value: &str) -> Self {
        self.skill = TextFilter::new(Some(value));
        self
    }

    pub fn job_type(mut self, value: &str) -> Self {
        self.job_type = TextFilter::new(Some(value));
        self
    }

    pub fn verified_only(mut self) -> Self {
        self.verified_only = true;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.describe_parts().is_empty()
    }

    pub fn matches(&self, worker: &Worker) -> bool {
        if let Some(f) = &self.location {
            if !f.matches(&worker.location) {
                return false;
            }
        }
        if let Some(f) = &self.skill {
            if !worker.skills.iter().any(|s| f.matches(s)) {
                return false;
            }
        }
        if let Some(f) = &self.job_type {
            if !f.matches(&worker.job_type) {
                return false;
            }
        }
        if let Some(min) = self.min_rating {
            if worker.rating < min {
                return false;
            }
        }
        if let Some(max) = self.max_rate {
            if worker.hourly_rate > max {
                return false;
            }
        }
        if let Some(min) = self.min_experience {
            if worker.experience_years < min {
                return false;
            }
        }
        !self.verified_only || worker.verified
    }

    /// Human-readable summary, e.g. `"location: Lagos, skill: Plumber"`.
    pub fn describe(&self) -> String {
        let parts = self.describe_parts();
        if parts.is_empty() {
            ALL_WORKERS.to_string()
        } else {
            parts.join(", ")
        }
    }

    fn describe_parts(&self) -> Vec<String> {
        let mut parts = Vec::new();
        if let Some(f) = &self.location {
            parts.push(format!("location: {}", f.raw));
        }
        if let Some(f) = &self.skill {
            parts.push(format!("skill: {}", f.raw));
        }
        if let Some(f) = &self.job_type {
            parts.push(format!("job_type: {}", f.raw));
        }
        if let Some(v) = self.min_rating {
            parts.push(format!("min_rating: {v:?}"));
        }
        if let Some(v) = self.max_rate {
            parts.push(format!("max_rate: {v:?}"));
        }
        if let Some(v) = self.min_experience {
            parts.push(format!("min_experience: {v}"));
        }
        if self.verified_only {
            parts.push("verified_only: true".to_string());
        }
        parts
    }
}

/// Resolve a raw `?limit=` value against its default and check it lies in
/// `1..=max`.
pub fn resolve_limit(
    raw: Option<i64>,
    default: usize,
    max: usize,
) -> Result<usize, DirectoryError> {
    let limit = match raw {
        Some(v) => usize::try_from(v).unwrap_or(0),
        None => default,
    };
    check_limit(limit, max)
}

pub fn check_limit(limit: usize, max: usize) -> Result<usize, DirectoryError> {
    if (1..=max).contains(&limit) {
        Ok(limit)
    } else {
        Err(DirectoryError::Validation(format!(
            "limit must be between 1 and {max}"
        )))
    }
}
