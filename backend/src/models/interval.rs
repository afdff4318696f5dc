use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::api::BookingId;

/// Booking lifecycle as far as analytics are concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Active,
    Cancelled,
}

impl BookingStatus {
    /// Map a vendor status string. Only `cancelled` removes a booking from
    /// occupancy and earnings; every other status counts as active.
    pub fn from_vendor(status: &str) -> Self {
        if status.eq_ignore_ascii_case("cancelled") {
            BookingStatus::Cancelled
        } else {
            BookingStatus::Active
        }
    }
}

/// One occupancy interval: `[start, end)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingInterval {
    pub id: BookingId,
    pub start: DateTime<FixedOffset>,
    pub end: DateTime<FixedOffset>,
    pub status: BookingStatus,
}

impl BookingInterval {
    pub fn new(id: BookingId, start: DateTime<FixedOffset>, end: DateTime<FixedOffset>) -> Self {
        Self {
            id,
            start,
            end,
            status: BookingStatus::Active,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.end > self.start
    }
}
