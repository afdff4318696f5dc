//! Dataset repository trait.
//!
//! A dataset is one uploaded booking export, decoded once at upload time and
//! shared read-only afterwards.

use std::sync::Arc;

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::api::{DatasetId, DatasetInfo};
use crate::models::booking_set::BookingSet;

/// A decoded export ready to be stored.
#[derive(Debug, Clone)]
pub struct NewDataset {
    pub name: String,
    pub checksum: String,
    pub bookings: BookingSet,
}

/// A stored dataset: its metadata plus the shared booking set.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub info: DatasetInfo,
    pub bookings: Arc<BookingSet>,
}

/// Repository trait for booking datasets.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Check that the backing store is reachable.
    async fn health_check(&self) -> RepositoryResult<bool>;

    /// Store a dataset and assign it a fresh id. The new dataset becomes the
    /// latest one.
    async fn store_dataset(&self, dataset: NewDataset) -> RepositoryResult<DatasetInfo>;

    /// Fetch a dataset by id.
    ///
    /// # Returns
    /// * `Err(RepositoryError::NotFound)` - If no dataset has this id
    async fn get_dataset(&self, id: DatasetId) -> RepositoryResult<Dataset>;

    /// Fetch the most recently stored dataset.
    async fn latest_dataset(&self) -> RepositoryResult<Dataset>;

    /// Metadata of every stored dataset, newest first.
    async fn list_datasets(&self) -> RepositoryResult<Vec<DatasetInfo>>;

    async fn find_by_checksum(&self, checksum: &str) -> RepositoryResult<Option<DatasetInfo>>;
}
