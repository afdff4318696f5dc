use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::services::earnings::EarningsPeriod;

// =========================================================
// Earnings types + routes
// =========================================================

/// Earnings of one active booking, dated by its local start date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EarningsPoint {
    pub date: NaiveDate,
    pub earnings: f64,
}

/// Earnings summed over one truncated period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EarningsBucket {
    pub period_start: NaiveDate,
    pub earnings: f64,
    pub bookings: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EarningsSummary {
    pub total_earnings: f64,
    pub tax_year_start: NaiveDate,
    pub tax_year_earnings: f64,
    pub booking_count: usize,
    /// Cumulative earnings crossed a milestone within the last week.
    pub milestone_reached: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EarningsData {
    pub dataset_id: crate::api::DatasetId,
    pub period: EarningsPeriod,
    pub summary: EarningsSummary,
    /// Newest period first.
    pub buckets: Vec<EarningsBucket>,
}

pub const EARNINGS_PATH: &str = "/datasets/{dataset}/earnings";
