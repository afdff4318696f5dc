//! # JustPark Analytics Backend
//!
//! Occupancy and earnings analytics over JustPark booking exports.
//!
//! The core is the occupancy engine in [`services::occupancy`]: it turns
//! booking intervals into a gapless per-day series of occupied minutes
//! (capped at a full day) and derives trailing rolling occupancy ratios from
//! it. Everything else in the crate feeds it or presents its results.
//!
//! ## Architecture
//!
//! - [`api`]: Public types and identifier newtypes
//! - [`models`]: The vendor export format and the in-memory [`models::BookingSet`]
//! - [`io`]: Export loaders
//! - [`services`]: Occupancy engine plus driver, earnings and live analytics
//! - [`routes`]: Response types and route paths
//! - [`db`]: Dataset repository with checksum deduplication
//! - [`config`]: TOML configuration with environment overrides
//! - [`http`]: Axum-based HTTP server (feature `http-server`)

// RepositoryError carries structured context.
#![allow(clippy::result_large_err)]

pub mod api;
pub mod config;
pub mod db;
pub mod io;
pub mod models;
pub mod routes;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;

#[cfg(test)]
mod test_fixtures;
