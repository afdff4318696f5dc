//! Repository-agnostic dataset operations.
//!
//! Handlers and the server bootstrap go through these functions rather than
//! calling the repository directly; they add checksum deduplication and the
//! `latest` alias on top of the raw trait.

use std::fmt;
use std::str::FromStr;

use log::{debug, info};

use crate::api::{DatasetId, DatasetInfo};
use crate::db::checksum::calculate_checksum;
use crate::db::repository::{
    BookingRepository, Dataset, ErrorContext, NewDataset, RepositoryError, RepositoryResult,
};
use crate::io::loaders::parse_export_set;
use crate::routes::landing::LATEST_DATASET;

/// How a request names a dataset: by id or as the latest upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetRef {
    Latest,
    Id(DatasetId),
}

impl FromStr for DatasetRef {
    type Err = RepositoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case(LATEST_DATASET) {
            return Ok(Self::Latest);
        }
        s.parse::<i64>()
            .map(|id| Self::Id(DatasetId::new(id)))
            .map_err(|_| {
                RepositoryError::validation_with_context(
                    format!("'{}' is neither a dataset id nor '{}'", s, LATEST_DATASET),
                    ErrorContext::new("resolve_dataset").with_entity("dataset"),
                )
            })
    }
}

impl fmt::Display for DatasetRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Latest => write!(f, "{}", LATEST_DATASET),
            Self::Id(id) => write!(f, "{}", id),
        }
    }
}

/// Result of an upload.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreOutcome {
    pub info: DatasetInfo,
    /// `false` when an identical document was already stored.
    pub created: bool,
}

pub async fn health_check<R: BookingRepository + ?Sized>(repo: &R) -> RepositoryResult<bool> {
    repo.health_check().await
}

/// Checksum and decode a raw export document.
///
/// CPU-bound for large exports; async callers run it on the blocking pool.
/// Documents that fail to parse are rejected with a validation error.
pub fn prepare_export(name: &str, raw: &str) -> RepositoryResult<NewDataset> {
    let checksum = calculate_checksum(raw);
    let bookings = parse_export_set(raw).map_err(|e| {
        RepositoryError::validation_with_context(
            format!("{:#}", e),
            ErrorContext::new("store_export")
                .with_entity("dataset")
                .with_details(name.to_string()),
        )
    })?;

    Ok(NewDataset {
        name: name.to_string(),
        checksum,
        bookings,
    })
}

/// Store a decoded export. A dataset with the same checksum is returned as
/// is instead of being stored twice.
pub async fn store_prepared<R: BookingRepository + ?Sized>(
    repo: &R,
    dataset: NewDataset,
) -> RepositoryResult<StoreOutcome> {
    if let Some(existing) = repo.find_by_checksum(&dataset.checksum).await? {
        info!(
            "Export '{}' matches dataset {} (checksum {}), skipping store",
            dataset.name, existing.dataset_id, dataset.checksum
        );
        return Ok(StoreOutcome {
            info: existing,
            created: false,
        });
    }

    let info = repo.store_dataset(dataset).await?;
    Ok(StoreOutcome {
        info,
        created: true,
    })
}

/// Store a raw export document: [`prepare_export`] then [`store_prepared`].
pub async fn store_export<R: BookingRepository + ?Sized>(
    repo: &R,
    name: &str,
    raw: &str,
) -> RepositoryResult<StoreOutcome> {
    let dataset = prepare_export(name, raw)?;
    store_prepared(repo, dataset).await
}

pub async fn get_dataset<R: BookingRepository + ?Sized>(
    repo: &R,
    dataset: DatasetRef,
) -> RepositoryResult<Dataset> {
    debug!("Resolving dataset {}", dataset);
    match dataset {
        DatasetRef::Latest => repo.latest_dataset().await,
        DatasetRef::Id(id) => repo.get_dataset(id).await,
    }
}

pub async fn list_datasets<R: BookingRepository + ?Sized>(
    repo: &R,
) -> RepositoryResult<Vec<DatasetInfo>> {
    repo.list_datasets().await
}
