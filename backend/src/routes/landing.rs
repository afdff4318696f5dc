use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};

use crate::api::DatasetId;

/// A stored booking export, without its bookings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetInfo {
    pub dataset_id: DatasetId,
    pub name: String,
    /// SHA-256 of the uploaded document.
    pub checksum: String,
    pub fetched_at: DateTime<FixedOffset>,
    pub uploaded_at: DateTime<Utc>,
    pub booking_count: usize,
}

pub const DATASETS_PATH: &str = "/datasets";

/// Alias accepted wherever a dataset id is expected.
pub const LATEST_DATASET: &str = "latest";
