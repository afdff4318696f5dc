use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// =========================================================
// Occupancy types + routes
// =========================================================

/// Occupied minutes for one calendar day, saturated at a full day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyOccupancy {
    pub date: NaiveDate,
    pub occupied_minutes: u32,
}

impl DailyOccupancy {
    /// Fraction of the day that was occupied, in `[0, 1]`.
    pub fn ratio(&self) -> f64 {
        self.occupied_minutes as f64 / crate::services::occupancy::MINUTES_PER_DAY as f64
    }
}

/// Trailing mean occupancy ratio ending on `date`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RollingOccupancy {
    pub date: NaiveDate,
    pub window: usize,
    pub occupancy: f64,
}

/// Rolling occupancy for one window size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RollingSeries {
    pub window: usize,
    /// Chart label, e.g. `7d`.
    pub label: String,
    pub points: Vec<RollingOccupancy>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OccupancySummary {
    pub days: usize,
    pub total_occupied_minutes: u64,
    pub mean_occupancy: f64,
    pub min_occupancy: f64,
    pub max_occupancy: f64,
}

/// Daily occupancy dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OccupancyData {
    pub dataset_id: crate::api::DatasetId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub driver_id: Option<crate::api::DriverId>,
    pub daily: Vec<DailyOccupancy>,
    pub summary: OccupancySummary,
}

/// Rolling occupancy dataset, one series per requested window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RollingOccupancyData {
    pub dataset_id: crate::api::DatasetId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub driver_id: Option<crate::api::DriverId>,
    pub series: Vec<RollingSeries>,
}

pub const DAILY_OCCUPANCY_PATH: &str = "/datasets/{dataset}/occupancy/daily";
pub const ROLLING_OCCUPANCY_PATH: &str = "/datasets/{dataset}/occupancy/rolling";
