//! Data Transfer Objects for the HTTP API.
//!
//! Response bodies for the analytics endpoints are the route types
//! re-exported here; this module adds the query strings and the few
//! responses that exist only at the HTTP layer.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub use crate::api::{
    // Datasets
    DatasetInfo,
    // Drivers
    DriverListData, DriverSpotlight, DriverStats,
    // Earnings
    EarningsData,
    // Live
    LiveData,
    // Occupancy
    OccupancyData, RollingOccupancyData,
};

/// Query parameters for the daily occupancy endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OccupancyQuery {
    /// Restrict to one driver's bookings
    #[serde(default)]
    pub driver_id: Option<i64>,
}

/// Query parameters for the rolling occupancy endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RollingQuery {
    /// Comma-separated window lengths in days, e.g. `7,30`
    #[serde(default)]
    pub windows: Option<String>,
    #[serde(default)]
    pub driver_id: Option<i64>,
}

impl RollingQuery {
    /// Requested windows, or `None` when the query names none.
    pub fn parse_windows(&self) -> Result<Option<Vec<usize>>, String> {
        let raw = match self.windows.as_deref().map(str::trim) {
            None | Some("") => return Ok(None),
            Some(raw) => raw,
        };
        raw.split(',')
            .map(|part| {
                part.trim()
                    .parse::<usize>()
                    .map_err(|_| format!("Invalid window '{}'", part.trim()))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Some)
    }
}

/// Query parameters for the earnings endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct EarningsQuery {
    /// `day`, `week`, `month`, `quarter` or `year` (default: week)
    #[serde(default)]
    pub period: Option<String>,
    /// Reference date for the tax year and milestone (default: today)
    #[serde(default)]
    pub today: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LiveQuery {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

/// Query parameters for dataset uploads.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UploadQuery {
    /// Display name for the dataset (default: "upload")
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    pub dataset: DatasetInfo,
    /// `false` when the same document had already been uploaded
    pub created: bool,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// Repository status
    pub database: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetListResponse {
    pub datasets: Vec<DatasetInfo>,
    pub total: usize,
}
