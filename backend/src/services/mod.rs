//! Service layer for business logic.
//!
//! Services take an in-memory [`BookingSet`](crate::models::BookingSet) and
//! produce the response types defined under [`routes`](crate::routes). They
//! hold no state and never touch the repository; the HTTP handlers resolve
//! the dataset first and hand the decoded bookings over.

use chrono::NaiveDate;
use thiserror::Error;

use crate::api::DriverId;

pub mod drivers;
pub mod earnings;
pub mod live;
pub mod occupancy;

pub use drivers::{driver_spotlight, driver_stats};
pub use earnings::{
    earnings_by_period, earnings_points, earnings_summary, milestone_reached, tax_year_start,
    EarningsPeriod,
};
pub use live::live_bookings;
pub use occupancy::{
    compute_daily_occupancy, compute_rolling_occupancy, rolling_occupancy_series, summarize,
    OccupancyError, MINUTES_PER_DAY,
};

/// Errors raised by the analytics built on top of the occupancy engine.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AnalyticsError {
    #[error("driver {0} not found")]
    DriverNotFound(DriverId),

    #[error("invalid date range: {from} is after {to}")]
    InvalidDateRange {
        from: NaiveDate,
        to: NaiveDate,
    },

    #[error("invalid earnings period '{0}'")]
    InvalidPeriod(String),

    #[error(transparent)]
    Occupancy(#[from] OccupancyError),
}

pub type AnalyticsResult<T> = Result<T, AnalyticsError>;
