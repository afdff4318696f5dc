//! Booking fixtures shared by unit tests.

use serde_json::{json, Value};

use crate::models::booking::{Booking, BookingExport};
use crate::models::booking_set::BookingSet;

pub(crate) fn booking_value(
    id: i64,
    driver_id: i64,
    start: &str,
    end: &str,
    status: &str,
    earnings: f64,
) -> Value {
    json!({
        "id": id,
        "start_date": start,
        "end_date": end,
        "listing_id": 1,
        "owner_id": 1,
        "driver_id": driver_id,
        "vehicle_id": driver_id * 10,
        "type": "booking",
        "status": status,
        "timezone": "Europe/London",
        "title": "Driveway",
        "photos": [],
        "infinite": false,
        "booking_type": "single",
        "auto_pay": false,
        "ev_charging": false,
        "vehicle": { "data": {
            "id": driver_id * 10,
            "make": "Ford",
            "model": "Focus",
            "registration": format!("AB{}CDE", driver_id),
            "colour": "Blue",
            "is_primary": true,
            "auto_pay": false,
            "is_auto_pay_eligible": false
        }},
        "driver": { "data": {
            "id": driver_id,
            "name": format!("Driver {}", driver_id),
            "first_name": "Driver",
            "last_name": format!("{}", driver_id),
            "profile_photo": "https://example.invalid/photo.png",
            "is_managed": false,
            "registration_date": "2023-05-01T12:00:00+01:00",
            "email": format!("driver{}@example.invalid", driver_id),
            "email_verified": true,
            "phone_number": "07000000000",
            "phone_number_verified": true,
            "company_name": ""
        }},
        "driver_price": { "data": {
            "id": format!("paid-{}", id),
            "value": earnings * 1.25,
            "pennies": (earnings * 125.0).round() as i64,
            "currency": "GBP",
            "formatted": format!("£{:.2}", earnings * 1.25)
        }},
        "space_owner_earnings": { "data": {
            "id": format!("earn-{}", id),
            "value": earnings,
            "pennies": (earnings * 100.0).round() as i64,
            "currency": "GBP",
            "formatted": format!("£{:.2}", earnings)
        }}
    })
}

pub(crate) fn booking(
    id: i64,
    driver_id: i64,
    start: &str,
    end: &str,
    status: &str,
    earnings: f64,
) -> Booking {
    serde_json::from_value(booking_value(id, driver_id, start, end, status, earnings))
        .expect("fixture booking must deserialize")
}

pub(crate) fn export(items: Vec<Booking>) -> BookingExport {
    BookingExport {
        fetched_at: chrono::DateTime::parse_from_rfc3339("2025-09-10T09:00:00+01:00")
            .expect("fixture timestamp"),
        total: items.len() as i64,
        items,
    }
}

pub(crate) fn booking_set(items: Vec<Booking>) -> BookingSet {
    BookingSet::from_export(export(items))
}
