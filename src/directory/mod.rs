//! In-memory worker directory: one immutable snapshot plus the read-only
//! search and lookup operations over it.

pub mod dataset;
pub mod filter;
pub mod ranking;

use std::collections::HashSet;

use crate::config::LimitConfig;
use crate::error::DirectoryError;
use crate::models::{SearchResponse, Worker};

use filter::{check_limit, SearchFilters};

/// An immutable snapshot of the worker collection.
#[derive(Debug, Clone)]
pub struct WorkerDirectory {
    workers: Vec<Worker>,
    job_types: Vec<String>,
    limits: LimitConfig,
}

impl WorkerDirectory {
    /// Build a snapshot, checking every record invariant up front.
    pub fn new(
        workers: Vec<Worker>,
        job_types: Vec<String>,
        limits: LimitConfig,
    ) -> Result<Self, DirectoryError> {
        let mut seen = HashSet::with_capacity(workers.len());
        for w in &workers {
            if w.id == 0 {
                return Err(DirectoryError::InvalidRecord(format!(
                    "worker '{}' has id 0",
                    w.name
                )));
            }
            if !seen.insert(w.id) {
                return Err(DirectoryError::InvalidRecord(format!(
                    "duplicate worker id {}",
                    w.id
                )));
            }
            if !(0.0..=filter::MAX_RATING).contains(&w.rating) {
                return Err(DirectoryError::InvalidRecord(format!(
                    "worker {} has rating {} outside 0-{}",
                    w.id,
                    w.rating,
                    filter::MAX_RATING
                )));
            }
            if !w.hourly_rate.is_finite() || w.hourly_rate < 0.0 {
                return Err(DirectoryError::InvalidRecord(format!(
                    "worker {} has invalid hourly rate {}",
                    w.id, w.hourly_rate
                )));
            }
            if w.skills.first() != Some(&w.job_type) {
                return Err(DirectoryError::InvalidRecord(format!(
                    "worker {} skills must start with job type '{}'",
                    w.id, w.job_type
                )));
            }
        }

        Ok(Self {
            workers,
            job_types,
            limits,
        })
    }

    pub fn len(&self) -> usize {
        self.workers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workers.is_empty()
    }

    pub fn workers(&self) -> &[Worker] {
        &self.workers
    }

    pub fn job_types(&self) -> &[String] {
        &self.job_types
    }

    /// Every worker matching all filters, ranked. Never truncated.
    pub fn search(&self, filters: &SearchFilters) -> SearchResponse {
        let matched = self.ranked_matches(|w| filters.matches(w));
        let workers: Vec<Worker> = matched.into_iter().cloned().collect();
        SearchResponse {
            total_found: workers.len(),
            workers,
            search_query: filters.describe(),
        }
    }

    pub fn get_by_id(&self, id: u32) -> Result<&Worker, DirectoryError> {
        self.workers
            .iter()
            .find(|w| w.id == id)
            .ok_or_else(|| DirectoryError::NotFound(format!("Worker with id {id} not found")))
    }

    /// Top `limit` workers of the whole collection.
    pub fn recommended(&self, limit: usize) -> Result<SearchResponse, DirectoryError> {
        let limit = check_limit(limit, self.limits.recommended_max)?;
        let mut ranked = self.ranked_matches(|_| true);
        ranked.truncate(limit);
        let workers: Vec<Worker> = ranked.into_iter().cloned().collect();
        Ok(SearchResponse {
            total_found: workers.len(),
            workers,
            search_query: format!("top {limit} recommended workers"),
        })
    }

    pub fn by_location(
        &self,
        city: &str,
        limit: usize,
    ) -> Result<SearchResponse, DirectoryError> {
        let city = require_text("city", city)?;
        let limit = check_limit(limit, self.limits.listing_max)?;
        let filters = SearchFilters::default().location(city);
        let matched = self.ranked_matches(|w| filters.matches(w));
        if matched.is_empty() {
            return Err(DirectoryError::NotFound(format!("No workers found in {city}")));
        }
        Ok(truncated(matched, limit, format!("workers in {city}")))
    }

    pub fn by_job_type(
        &self,
        job_type: &str,
        limit: usize,
    ) -> Result<SearchResponse, DirectoryError> {
        let job_type = require_text("job type", job_type)?;
        let limit = check_limit(limit, self.limits.listing_max)?;
        let filters = SearchFilters::default().job_type(job_type);
        let matched = self.ranked_matches(|w| filters.matches(w));
        if matched.is_empty() {
            return Err(DirectoryError::NotFound(format!(
                "No workers found for job type {job_type}"
            )));
        }
        Ok(truncated(matched, limit, format!("job type: {job_type}")))
    }

    fn ranked_matches(&self, predicate: impl Fn(&Worker) -> bool) -> Vec<&Worker> {
        let mut matched: Vec<&Worker> =
            self.workers.iter().filter(|w| predicate(*w)).collect();
        ranking::rank(&mut matched);
        matched
    }
}

/// Lookup keys must carry at least one non-whitespace character.
fn require_text<'a>(name: &str, value: &'a str) -> Result<&'a str, DirectoryError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DirectoryError::Validation(format!("{name} must not be blank")));
    }
    Ok(trimmed)
}

/// `total_found` reports the match count before truncation.
fn truncated(mut matched: Vec<&Worker>, limit: usize, search_query: String) -> SearchResponse {
    let total_found = matched.len();
    matched.truncate(limit);
    SearchResponse {
        workers: matched.into_iter().cloned().collect(),
        total_found,
        search_query,
    }
}
