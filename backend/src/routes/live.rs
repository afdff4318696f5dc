use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::api::{BookingId, DatasetId, DriverId};

// =========================================================
// Live view types + routes
// =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LiveState {
    Completed,
    InProgress,
    Upcoming,
}

/// A booking row as shown on the live board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiveBooking {
    pub booking_id: BookingId,
    pub driver_id: DriverId,
    pub driver_name: String,
    pub phone_number: Option<String>,
    pub email: String,
    pub registration: String,
    pub vehicle: String,
    pub colour: Option<String>,
    pub start: DateTime<FixedOffset>,
    pub end: DateTime<FixedOffset>,
    pub duration_minutes: i64,
    pub earnings: f64,
    /// What the driver paid, including fees.
    pub paid: f64,
    pub state: LiveState,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiveData {
    pub dataset_id: DatasetId,
    pub bookings: Vec<LiveBooking>,
}

pub const LIVE_PATH: &str = "/datasets/{dataset}/live";
