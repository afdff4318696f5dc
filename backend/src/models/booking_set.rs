//! In-memory view over one booking export.
//!
//! `BookingSet` is what the analytics services consume: it partitions bookings
//! into active and cancelled, and indexes drivers and vehicles by id (the
//! export repeats them on every booking).

use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset};

use crate::api::{DriverId, VehicleId};
use crate::models::booking::{Booking, BookingExport, Driver, Vehicle};
use crate::models::interval::{BookingInterval, BookingStatus};

#[derive(Debug, Clone)]
pub struct BookingSet {
    fetched_at: DateTime<FixedOffset>,
    total: i64,
    bookings: Vec<Booking>,
    drivers: BTreeMap<DriverId, Driver>,
    vehicles: BTreeMap<VehicleId, Vehicle>,
}

impl BookingSet {
    pub fn from_export(export: BookingExport) -> Self {
        let mut drivers = BTreeMap::new();
        let mut vehicles = BTreeMap::new();

        for booking in &export.items {
            drivers
                .entry(booking.driver.data.id)
                .or_insert_with(|| booking.driver.data.clone());
            vehicles
                .entry(booking.vehicle.data.id)
                .or_insert_with(|| booking.vehicle.data.clone());
        }

        Self {
            fetched_at: export.fetched_at,
            total: export.total,
            bookings: export.items,
            drivers,
            vehicles,
        }
    }

    pub fn fetched_at(&self) -> DateTime<FixedOffset> {
        self.fetched_at
    }

    /// Total reported by the vendor (may exceed `len()` for truncated exports).
    pub fn reported_total(&self) -> i64 {
        self.total
    }

    pub fn len(&self) -> usize {
        self.bookings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }

    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn active(&self) -> impl Iterator<Item = &Booking> {
        self.bookings.iter().filter(|b| !b.is_cancelled())
    }

    pub fn cancelled(&self) -> impl Iterator<Item = &Booking> {
        self.bookings.iter().filter(|b| b.is_cancelled())
    }

    pub fn bookings_for_driver(&self, driver_id: DriverId) -> impl Iterator<Item = &Booking> {
        self.bookings.iter().filter(move |b| b.driver_id == driver_id)
    }

    pub fn driver(&self, driver_id: DriverId) -> Option<&Driver> {
        self.drivers.get(&driver_id)
    }

    pub fn drivers(&self) -> impl Iterator<Item = &Driver> {
        self.drivers.values()
    }

    pub fn vehicle(&self, vehicle_id: VehicleId) -> Option<&Vehicle> {
        self.vehicles.get(&vehicle_id)
    }

    pub fn vehicles(&self) -> impl Iterator<Item = &Vehicle> {
        self.vehicles.values()
    }

    /// Occupancy intervals of active bookings, optionally for one driver only.
    pub fn intervals(&self, driver: Option<DriverId>) -> Vec<BookingInterval> {
        self.active()
            .filter(|b| driver.map_or(true, |id| b.driver_id == id))
            .map(|b| BookingInterval {
                id: b.id,
                start: b.start_date,
                end: b.end_date,
                status: BookingStatus::Active,
            })
            .collect()
    }
}

impl From<BookingExport> for BookingSet {
    fn from(export: BookingExport) -> Self {
        Self::from_export(export)
    }
}
