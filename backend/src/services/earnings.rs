//! Earnings analytics: totals, tax-year figures and per-period buckets.

use std::collections::BTreeMap;
use std::str::FromStr;

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::api::{EarningsBucket, EarningsPoint, EarningsSummary};
use crate::models::booking_set::BookingSet;
use crate::services::AnalyticsError;

/// UK tax years start on 6 April.
const TAX_YEAR_START_MONTH: u32 = 4;
const TAX_YEAR_START_DAY: u32 = 6;

pub const DEFAULT_MILESTONE_STEP: f64 = 500.0;
pub const MILESTONE_LOOKBACK_DAYS: i64 = 7;

/// Bucket width for earnings charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EarningsPeriod {
    Day,
    #[default]
    Week,
    Month,
    Quarter,
    Year,
}

impl FromStr for EarningsPeriod {
    type Err = AnalyticsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "day" | "1d" => Ok(Self::Day),
            "week" | "1w" => Ok(Self::Week),
            "month" | "1mo" => Ok(Self::Month),
            "quarter" | "1q" => Ok(Self::Quarter),
            "year" | "1y" => Ok(Self::Year),
            _ => Err(AnalyticsError::InvalidPeriod(s.to_string())),
        }
    }
}

impl EarningsPeriod {
    /// First day of the period containing `date`. Weeks start on Monday.
    pub fn truncate(&self, date: NaiveDate) -> NaiveDate {
        let first_of = |month: u32| {
            NaiveDate::from_ymd_opt(date.year(), month, 1).unwrap_or(date)
        };
        match self {
            Self::Day => date,
            Self::Week => date - Duration::days(date.weekday().num_days_from_monday() as i64),
            Self::Month => first_of(date.month()),
            Self::Quarter => first_of((date.month0() / 3) * 3 + 1),
            Self::Year => first_of(1),
        }
    }
}

/// One point per active booking.
pub fn earnings_points(set: &BookingSet) -> Vec<EarningsPoint> {
    set.active()
        .map(|b| EarningsPoint {
            date: b.start_date.date_naive(),
            earnings: b.earnings(),
        })
        .collect()
}

/// Start of the tax year that contains `today`.
pub fn tax_year_start(today: NaiveDate) -> NaiveDate {
    let this_year = NaiveDate::from_ymd_opt(today.year(), TAX_YEAR_START_MONTH, TAX_YEAR_START_DAY);
    match this_year {
        Some(start) if today >= start => start,
        _ => NaiveDate::from_ymd_opt(today.year() - 1, TAX_YEAR_START_MONTH, TAX_YEAR_START_DAY)
            .unwrap_or(today),
    }
}

/// Whether cumulative earnings crossed a multiple of `step` in the week
/// leading up to `today`.
pub fn milestone_reached(points: &[EarningsPoint], today: NaiveDate, step: f64) -> bool {
    if points.is_empty() || step <= 0.0 {
        return false;
    }

    let cutoff = today - Duration::days(MILESTONE_LOOKBACK_DAYS);
    let total: f64 = points.iter().map(|p| p.earnings).sum();
    let before: f64 = points
        .iter()
        .filter(|p| p.date < cutoff)
        .map(|p| p.earnings)
        .sum();

    let milestones = |amount: f64| if amount > 0.0 { (amount / step).floor() as i64 } else { 0 };
    milestones(total) > milestones(before)
}

pub fn earnings_summary(points: &[EarningsPoint], today: NaiveDate, step: f64) -> EarningsSummary {
    let tax_year_start = tax_year_start(today);
    EarningsSummary {
        total_earnings: points.iter().map(|p| p.earnings).sum(),
        tax_year_start,
        tax_year_earnings: points
            .iter()
            .filter(|p| p.date >= tax_year_start)
            .map(|p| p.earnings)
            .sum(),
        booking_count: points.len(),
        milestone_reached: milestone_reached(points, today, step),
    }
}

/// Earnings summed per period, newest period first.
pub fn earnings_by_period(points: &[EarningsPoint], period: EarningsPeriod) -> Vec<EarningsBucket> {
    let mut buckets: BTreeMap<NaiveDate, (f64, usize)> = BTreeMap::new();
    for point in points {
        let entry = buckets.entry(period.truncate(point.date)).or_insert((0.0, 0));
        entry.0 += point.earnings;
        entry.1 += 1;
    }

    buckets
        .into_iter()
        .rev()
        .map(|(period_start, (earnings, bookings))| EarningsBucket {
            period_start,
            earnings,
            bookings,
        })
        .collect()
}
