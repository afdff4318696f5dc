//! Booking export types as delivered by the vendor bookings API.
//!
//! The export is a single JSON document: `{ fetchedAt, total, items: [...] }`.
//! Nested relations (`vehicle`, `driver`, prices) arrive wrapped in a
//! `{ "data": ... }` envelope, which is kept here so that an export can be
//! parsed and re-serialized without loss.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Deserializer, Serialize};

use crate::api::{BookingId, DriverId, VehicleId};
use crate::models::interval::BookingStatus;

/// Accepts RFC 3339 offsets (`+01:00`) as well as compact ones (`+0100`).
fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<FixedOffset>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw).map_err(D::Error::custom)
}

/// Parse a vendor timestamp.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<FixedOffset>, String> {
    DateTime::parse_from_rfc3339(raw)
        .or_else(|_| DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%z"))
        .or_else(|_| DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f%z"))
        .map_err(|e| format!("invalid timestamp '{}': {}", raw, e))
}

/// `phone_number_verified` is sometimes a flag and sometimes a timestamp string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PhoneVerification {
    Flag(bool),
    Text(String),
}

/// Wrapper used by the vendor API around every nested relation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

/// A monetary amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Price {
    pub id: String,
    pub value: f64,
    pub pennies: i64,
    pub currency: String,
    pub formatted: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: VehicleId,
    pub make: String,
    pub model: String,
    pub registration: String,
    #[serde(default)]
    pub colour: Option<String>,
    pub is_primary: bool,
    pub auto_pay: bool,
    pub is_auto_pay_eligible: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Driver {
    pub id: DriverId,
    pub name: String,
    pub first_name: String,
    pub last_name: String,
    pub profile_photo: String,
    pub is_managed: bool,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub registration_date: DateTime<FixedOffset>,
    pub email: String,
    pub email_verified: bool,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub phone_number_verified: Option<PhoneVerification>,
    pub company_name: String,
}

/// A single booking of the host's space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: BookingId,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub start_date: DateTime<FixedOffset>,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub end_date: DateTime<FixedOffset>,
    pub listing_id: i64,
    pub owner_id: i64,
    pub driver_id: DriverId,
    pub vehicle_id: VehicleId,
    #[serde(rename = "type")]
    pub kind: String,
    pub status: String,
    pub timezone: String,
    pub title: String,
    #[serde(default)]
    pub photos: Vec<String>,
    pub infinite: bool,
    pub booking_type: String,
    pub auto_pay: bool,
    pub ev_charging: bool,
    pub vehicle: Envelope<Vehicle>,
    pub driver: Envelope<Driver>,
    pub driver_price: Envelope<Price>,
    pub space_owner_earnings: Envelope<Price>,
}

impl Booking {
    pub fn booking_status(&self) -> BookingStatus {
        BookingStatus::from_vendor(&self.status)
    }

    pub fn is_cancelled(&self) -> bool {
        self.booking_status() == BookingStatus::Cancelled
    }

    /// Host earnings for this booking.
    pub fn earnings(&self) -> f64 {
        self.space_owner_earnings.data.value
    }

    /// Amount the driver paid.
    pub fn paid(&self) -> f64 {
        self.driver_price.data.value
    }

    pub fn duration_hours(&self) -> f64 {
        (self.end_date - self.start_date).num_seconds() as f64 / 3600.0
    }
}

/// The complete export document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingExport {
    #[serde(rename = "fetchedAt", deserialize_with = "deserialize_timestamp")]
    pub fetched_at: DateTime<FixedOffset>,
    pub total: i64,
    pub items: Vec<Booking>,
}
