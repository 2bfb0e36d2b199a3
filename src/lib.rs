//! Query, filter and bookmark engine for real-estate listings.
//!
//! Free-text search plus multi-dimensional filtering over a property
//! collection, and a consistent saved-property set, all backed by a
//! pluggable record store (seeded in-memory or remote API).

pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod storage;
