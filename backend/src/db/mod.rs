//! Dataset storage.
//!
//! Uploaded booking exports are stored behind the [`BookingRepository`]
//! trait so the storage backend can be swapped without touching handlers.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Application Layer (REST API, server bootstrap)         │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Service Layer (services.rs)                            │
//! │  - Checksum deduplication                               │
//! │  - `latest` alias resolution                            │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Repository Trait (repository/) - Abstract Interface    │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//!     ┌──────────────────────────────────────────────┐
//!     │             Local Repository                  │
//!     │               (in-memory)                     │
//!     └──────────────────────────────────────────────┘
//! ```
//!
//! # Recommended Usage
//!
//! ```ignore
//! use justpark_analytics::db::{services, LocalRepository};
//!
//! async fn example(raw: &str) -> Result<(), Box<dyn std::error::Error>> {
//!     let repo = LocalRepository::new();
//!     let stored = services::store_export(&repo, "bookings.json", raw).await?;
//!     let dataset = services::get_dataset(&repo, "latest".parse()?).await?;
//!     Ok(())
//! }
//! ```

pub mod checksum;
pub mod repositories;
pub mod repository;
pub mod services;


pub use checksum::calculate_checksum;
pub use repositories::LocalRepository;
pub use repository::{
    BookingRepository, Dataset, ErrorContext, NewDataset, RepositoryError, RepositoryResult,
};
pub use services::{
    get_dataset, health_check, list_datasets, prepare_export, store_export, store_prepared,
    DatasetRef, StoreOutcome,
};
