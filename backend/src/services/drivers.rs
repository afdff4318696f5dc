//! Driver analytics: per-driver aggregates and the driver spotlight.

use std::collections::BTreeMap;

use log::debug;

use crate::api::{DriverId, DriverSpotlight, DriverStats};
use crate::models::booking::{Booking, Vehicle};
use crate::models::booking_set::BookingSet;
use crate::services::occupancy::compute_daily_occupancy;
use crate::services::AnalyticsError;

#[derive(Default)]
struct Accumulator<'a> {
    active: Vec<&'a Booking>,
    cancelled: usize,
}

fn build_stats(driver_id: DriverId, name: String, acc: &Accumulator<'_>) -> DriverStats {
    let durations: Vec<f64> = acc.active.iter().map(|b| b.duration_hours()).collect();
    let (longest, shortest, average) = if durations.is_empty() {
        (0.0, 0.0, 0.0)
    } else {
        (
            durations.iter().copied().fold(f64::MIN, f64::max),
            durations.iter().copied().fold(f64::MAX, f64::min),
            durations.iter().sum::<f64>() / durations.len() as f64,
        )
    };

    DriverStats {
        driver_id,
        name,
        total_bookings: acc.active.len(),
        num_cancelled: acc.cancelled,
        total_earnings: acc.active.iter().map(|b| b.earnings()).sum(),
        total_paid: acc.active.iter().map(|b| b.paid()).sum(),
        longest_duration_hours: longest,
        shortest_duration_hours: shortest,
        average_duration_hours: average,
        first_booking: acc.active.iter().map(|b| b.start_date).min(),
        last_booking: acc.active.iter().map(|b| b.start_date).max(),
    }
}

fn accumulate(set: &BookingSet) -> BTreeMap<DriverId, Accumulator<'_>> {
    let mut per_driver: BTreeMap<DriverId, Accumulator<'_>> = BTreeMap::new();
    for booking in set.bookings() {
        let acc = per_driver.entry(booking.driver_id).or_default();
        if booking.is_cancelled() {
            acc.cancelled += 1;
        } else {
            acc.active.push(booking);
        }
    }
    per_driver
}

fn driver_name(set: &BookingSet, driver_id: DriverId) -> String {
    set.driver(driver_id)
        .map(|d| d.name.clone())
        .unwrap_or_default()
}

/// One row per driver, highest earnings first.
pub fn driver_stats(set: &BookingSet) -> Vec<DriverStats> {
    let mut stats: Vec<DriverStats> = accumulate(set)
        .iter()
        .map(|(&driver_id, acc)| build_stats(driver_id, driver_name(set, driver_id), acc))
        .collect();

    stats.sort_by(|a, b| {
        b.total_earnings
            .partial_cmp(&a.total_earnings)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.driver_id.cmp(&b.driver_id))
    });

    debug!("Computed driver stats for {} drivers", stats.len());
    stats
}

/// Profile, stats, vehicles, bookings and occupancy for a single driver.
pub fn driver_spotlight(
    set: &BookingSet,
    driver_id: DriverId,
) -> Result<DriverSpotlight, AnalyticsError> {
    let driver = set
        .driver(driver_id)
        .cloned()
        .ok_or(AnalyticsError::DriverNotFound(driver_id))?;

    let mut bookings: Vec<Booking> = set.bookings_for_driver(driver_id).cloned().collect();
    bookings.sort_by(|a, b| b.start_date.cmp(&a.start_date));

    let acc = Accumulator {
        active: set
            .bookings_for_driver(driver_id)
            .filter(|b| !b.is_cancelled())
            .collect(),
        cancelled: set
            .bookings_for_driver(driver_id)
            .filter(|b| b.is_cancelled())
            .count(),
    };
    let stats = build_stats(driver_id, driver.name.clone(), &acc);

    let mut vehicles: Vec<Vehicle> = Vec::new();
    for booking in &bookings {
        if vehicles.iter().any(|v| v.id == booking.vehicle_id) {
            continue;
        }
        if let Some(vehicle) = set.vehicle(booking.vehicle_id) {
            vehicles.push(vehicle.clone());
        }
    }

    let daily_occupancy = compute_daily_occupancy(&set.intervals(Some(driver_id)))?;

    Ok(DriverSpotlight {
        driver,
        stats,
        vehicles,
        bookings,
        daily_occupancy,
    })
}
