//! Occupancy engine.
//!
//! Turns booking intervals into per-day occupied minutes and trailing rolling
//! averages. Both operations are pure: they read only their arguments and can
//! be called concurrently from any number of request handlers.
//!
//! Day boundaries are computed in each interval's own UTC offset (the offset of
//! its start timestamp), so a booking made in BST is split at local midnight,
//! not at UTC midnight.

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};
use log::debug;

use crate::api::{BookingId, DailyOccupancy, OccupancySummary, RollingOccupancy, RollingSeries};
use crate::models::interval::BookingInterval;

pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Validation failures of the occupancy engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OccupancyError {
    /// `end <= start`.
    #[error("invalid interval {id}: end {end} is not after start {start}")]
    InvalidInterval {
        id: BookingId,
        start: DateTime<FixedOffset>,
        end: DateTime<FixedOffset>,
    },

    #[error("invalid rolling window {0}: must be at least one day")]
    InvalidWindow(usize),
}

pub type OccupancyResult<T> = Result<T, OccupancyError>;

fn validate(intervals: &[BookingInterval]) -> OccupancyResult<()> {
    match intervals.iter().find(|i| !i.is_valid()) {
        Some(bad) => Err(OccupancyError::InvalidInterval {
            id: bad.id,
            start: bad.start,
            end: bad.end,
        }),
        None => Ok(()),
    }
}

/// Interval endpoints as wall-clock times in the interval's own offset.
fn local_bounds(interval: &BookingInterval) -> (NaiveDateTime, NaiveDateTime) {
    let offset = *interval.start.offset();
    (
        interval.start.naive_local(),
        interval.end.with_timezone(&offset).naive_local(),
    )
}

/// Add the interval's overlap with each local day it touches to `minutes`.
fn accumulate(interval: &BookingInterval, minutes: &mut BTreeMap<NaiveDate, i64>) {
    let (start, end) = local_bounds(interval);
    let mut day = start.date();

    loop {
        let day_start = day.and_time(NaiveTime::MIN);
        if day_start >= end {
            break;
        }
        let day_end = day_start + Duration::days(1);
        let overlap = end.min(day_end) - start.max(day_start);
        if overlap > Duration::zero() {
            *minutes.entry(day).or_insert(0) += overlap.num_minutes();
        }
        match day.succ_opt() {
            Some(next) => day = next,
            None => break,
        }
    }
}

/// Compute occupied minutes for every calendar day spanned by `intervals`.
///
/// The result is gapless and ascending: one record per date from the earliest
/// local start date to the latest local end date, zero days included. Each
/// day's sum is capped at [`MINUTES_PER_DAY`], so overlapping bookings read as
/// "space occupied" rather than summed booked time.
pub fn compute_daily_occupancy(
    intervals: &[BookingInterval],
) -> OccupancyResult<Vec<DailyOccupancy>> {
    validate(intervals)?;

    let mut min_date: Option<NaiveDate> = None;
    let mut max_date: Option<NaiveDate> = None;
    let mut minutes: BTreeMap<NaiveDate, i64> = BTreeMap::new();

    for interval in intervals {
        let (start, end) = local_bounds(interval);
        min_date = Some(min_date.map_or(start.date(), |d| d.min(start.date())));
        max_date = Some(max_date.map_or(end.date(), |d| d.max(end.date())));
        accumulate(interval, &mut minutes);
    }

    let (Some(min_date), Some(max_date)) = (min_date, max_date) else {
        return Ok(Vec::new());
    };

    let daily: Vec<DailyOccupancy> = min_date
        .iter_days()
        .take_while(|d| *d <= max_date)
        .map(|date| {
            let sum = minutes.get(&date).copied().unwrap_or(0);
            DailyOccupancy {
                date,
                occupied_minutes: sum.clamp(0, MINUTES_PER_DAY as i64) as u32,
            }
        })
        .collect();

    debug!(
        "Computed daily occupancy for {} intervals over {} days ({} to {})",
        intervals.len(),
        daily.len(),
        min_date,
        max_date
    );

    Ok(daily)
}

/// Trailing simple moving average of the daily occupancy ratio.
///
/// `daily` must be the gapless ascending sequence produced by
/// [`compute_daily_occupancy`]. The first `window - 1` days are skipped, so
/// every emitted value averages exactly `window` days.
pub fn compute_rolling_occupancy(
    daily: &[DailyOccupancy],
    window: usize,
) -> OccupancyResult<Vec<RollingOccupancy>> {
    if window == 0 {
        return Err(OccupancyError::InvalidWindow(window));
    }
    if daily.len() < window {
        return Ok(Vec::new());
    }

    let denominator = window as f64 * MINUTES_PER_DAY as f64;
    let mut rolling = Vec::with_capacity(daily.len() + 1 - window);
    let mut sum: u64 = 0;

    for (i, day) in daily.iter().enumerate() {
        sum += day.occupied_minutes as u64;
        if i >= window {
            sum -= daily[i - window].occupied_minutes as u64;
        }
        if i + 1 >= window {
            rolling.push(RollingOccupancy {
                date: day.date,
                window,
                occupancy: sum as f64 / denominator,
            });
        }
    }

    Ok(rolling)
}

/// Rolling occupancy for several window sizes, in the order requested.
pub fn rolling_occupancy_series(
    daily: &[DailyOccupancy],
    windows: &[usize],
) -> OccupancyResult<Vec<RollingSeries>> {
    windows
        .iter()
        .map(|&window| {
            Ok(RollingSeries {
                window,
                label: format!("{}d", window),
                points: compute_rolling_occupancy(daily, window)?,
            })
        })
        .collect()
}

/// Headline figures for a daily occupancy sequence.
pub fn summarize(daily: &[DailyOccupancy]) -> OccupancySummary {
    if daily.is_empty() {
        return OccupancySummary {
            days: 0,
            total_occupied_minutes: 0,
            mean_occupancy: 0.0,
            min_occupancy: 0.0,
            max_occupancy: 0.0,
        };
    }

    let total: u64 = daily.iter().map(|d| d.occupied_minutes as u64).sum();
    let min = daily.iter().map(|d| d.occupied_minutes).min().unwrap_or(0);
    let max = daily.iter().map(|d| d.occupied_minutes).max().unwrap_or(0);
    let per_day = MINUTES_PER_DAY as f64;

    OccupancySummary {
        days: daily.len(),
        total_occupied_minutes: total,
        mean_occupancy: total as f64 / (daily.len() as f64 * per_day),
        min_occupancy: min as f64 / per_day,
        max_occupancy: max as f64 / per_day,
    }
}

#[cfg(test)]
#[path = "occupancy_tests.rs"]
mod occupancy_tests;
