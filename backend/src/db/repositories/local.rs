//! In-memory repository for local development and tests.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use log::info;
use parking_lot::RwLock;

use crate::api::{DatasetId, DatasetInfo};
use crate::db::repository::{
    BookingRepository, Dataset, ErrorContext, NewDataset, RepositoryError, RepositoryResult,
};

#[derive(Default)]
struct LocalData {
    datasets: BTreeMap<DatasetId, Dataset>,
    by_checksum: HashMap<String, DatasetId>,
    next_id: i64,
}

/// Stores datasets in a process-local map. Ids start at 1 and increase with
/// every store, so the highest id is always the latest dataset.
#[derive(Default, Clone)]
pub struct LocalRepository {
    data: Arc<RwLock<LocalData>>,
}

impl LocalRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.data.read().datasets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl BookingRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(true)
    }

    async fn store_dataset(&self, dataset: NewDataset) -> RepositoryResult<DatasetInfo> {
        let mut data = self.data.write();
        data.next_id += 1;
        let id = DatasetId::new(data.next_id);

        let info = DatasetInfo {
            dataset_id: id,
            name: dataset.name,
            checksum: dataset.checksum,
            fetched_at: dataset.bookings.fetched_at(),
            uploaded_at: Utc::now(),
            booking_count: dataset.bookings.len(),
        };

        data.by_checksum.insert(info.checksum.clone(), id);
        data.datasets.insert(
            id,
            Dataset {
                info: info.clone(),
                bookings: Arc::new(dataset.bookings),
            },
        );

        info!(
            "Stored dataset {} '{}' with {} bookings",
            id, info.name, info.booking_count
        );
        Ok(info)
    }

    async fn get_dataset(&self, id: DatasetId) -> RepositoryResult<Dataset> {
        self.data.read().datasets.get(&id).cloned().ok_or_else(|| {
            RepositoryError::not_found_with_context(
                format!("Dataset {} not found", id),
                ErrorContext::new("get_dataset")
                    .with_entity("dataset")
                    .with_entity_id(id),
            )
        })
    }

    async fn latest_dataset(&self) -> RepositoryResult<Dataset> {
        self.data
            .read()
            .datasets
            .values()
            .next_back()
            .cloned()
            .ok_or_else(|| {
                RepositoryError::not_found_with_context(
                    "No dataset has been uploaded yet",
                    ErrorContext::new("latest_dataset").with_entity("dataset"),
                )
            })
    }

    async fn list_datasets(&self) -> RepositoryResult<Vec<DatasetInfo>> {
        Ok(self
            .data
            .read()
            .datasets
            .values()
            .rev()
            .map(|d| d.info.clone())
            .collect())
    }

    async fn find_by_checksum(&self, checksum: &str) -> RepositoryResult<Option<DatasetInfo>> {
        let data = self.data.read();
        Ok(data
            .by_checksum
            .get(checksum)
            .and_then(|id| data.datasets.get(id))
            .map(|d| d.info.clone()))
    }
}
