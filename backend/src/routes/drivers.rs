use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::api::{DailyOccupancy, DatasetId, DriverId};
use crate::models::booking::{Booking, Driver, Vehicle};

// =========================================================
// Driver types + routes
// =========================================================

/// Per-driver aggregates. Earnings, paid amounts and durations cover active
/// bookings only; `num_cancelled` counts the rest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriverStats {
    pub driver_id: DriverId,
    pub name: String,
    pub total_bookings: usize,
    pub num_cancelled: usize,
    pub total_earnings: f64,
    pub total_paid: f64,
    pub longest_duration_hours: f64,
    pub shortest_duration_hours: f64,
    pub average_duration_hours: f64,
    pub first_booking: Option<DateTime<FixedOffset>>,
    pub last_booking: Option<DateTime<FixedOffset>>,
}

/// Everything known about one driver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriverSpotlight {
    pub driver: Driver,
    pub stats: DriverStats,
    pub vehicles: Vec<Vehicle>,
    /// All of the driver's bookings, newest first.
    pub bookings: Vec<Booking>,
    pub daily_occupancy: Vec<DailyOccupancy>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriverListData {
    pub dataset_id: DatasetId,
    /// Highest earnings first.
    pub drivers: Vec<DriverStats>,
}

pub const DRIVERS_PATH: &str = "/datasets/{dataset}/drivers";
pub const DRIVER_PATH: &str = "/datasets/{dataset}/drivers/{driver_id}";
