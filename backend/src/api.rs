//! Public API surface for the analytics backend.
//!
//! This file consolidates the DTO types for the HTTP API.
//! All types derive Serialize/Deserialize for JSON serialization.

pub use crate::routes::drivers::DriverListData;
pub use crate::routes::drivers::DriverSpotlight;
pub use crate::routes::drivers::DriverStats;
pub use crate::routes::earnings::EarningsBucket;
pub use crate::routes::earnings::EarningsData;
pub use crate::routes::earnings::EarningsPoint;
pub use crate::routes::earnings::EarningsSummary;
pub use crate::routes::landing::DatasetInfo;
pub use crate::routes::live::LiveBooking;
pub use crate::routes::live::LiveData;
pub use crate::routes::live::LiveState;
pub use crate::routes::occupancy::DailyOccupancy;
pub use crate::routes::occupancy::OccupancyData;
pub use crate::routes::occupancy::OccupancySummary;
pub use crate::routes::occupancy::RollingOccupancy;
pub use crate::routes::occupancy::RollingOccupancyData;
pub use crate::routes::occupancy::RollingSeries;

pub use crate::models::booking::{Booking, BookingExport, Driver, Price, Vehicle};
pub use crate::models::booking_set::BookingSet;
pub use crate::models::interval::{BookingInterval, BookingStatus};

use serde::{Deserialize, Serialize};

/// Stored dataset identifier (one uploaded booking export).
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct DatasetId(pub i64);

/// Booking identifier as issued by the vendor.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct BookingId(pub i64);

/// Driver identifier.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct DriverId(pub i64);

/// Vehicle identifier.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct VehicleId(pub i64);

impl DatasetId {
    pub fn new(value: i64) -> Self {
        DatasetId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl BookingId {
    pub fn new(value: i64) -> Self {
        BookingId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl DriverId {
    pub fn new(value: i64) -> Self {
        DriverId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl VehicleId {
    pub fn new(value: i64) -> Self {
        VehicleId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for DatasetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl std::fmt::Display for BookingId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl std::fmt::Display for DriverId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl std::fmt::Display for VehicleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<DatasetId> for i64 {
    fn from(id: DatasetId) -> Self {
        id.0
    }
}

impl From<i64> for DatasetId {
    fn from(value: i64) -> Self {
        DatasetId(value)
    }
}

impl From<i64> for DriverId {
    fn from(value: i64) -> Self {
        DriverId(value)
    }
}
