//! # wakafix
//!
//! An HTTP service exposing an in-memory directory of service workers
//! (plumbers, electricians, tailors, ...) across Nigerian cities.
//!
//! ## Request flow
//!
//! ```text
//!     query params ──► SearchFilters (validate, 400 on range errors)
//!                            │
//!                            ▼
//!     immutable snapshot ──► filter (AND of every supplied predicate)
//!                            │
//!                            ▼
//!                      stable sort: rating desc, verified first
//!                            │
//!                            ▼
//!                      truncate to limit ──► {workers, total_found, search_query}
//! ```
//!
//! ## Module Overview
//!
//! - [`config`] - Environment-based configuration for the server, dataset and limits
//! - [`models`] - Worker record and request/response types
//! - [`directory`] - The immutable worker snapshot and its search/lookup operations
//! - [`directory::dataset`] - Job-type catalog, locations, seed data and the seeded generator
//! - [`api`] - Axum HTTP handlers and router
//! - [`state`] - Shared application state holding the current snapshot
//! - [`error`] - Domain and HTTP error types
//! - [`autofill`] - Standalone embedding classifier used by the `wakafix-autofill` binary

pub mod api;
pub mod autofill;
pub mod config;
pub mod directory;
pub mod error;
pub mod models;
pub mod state;
