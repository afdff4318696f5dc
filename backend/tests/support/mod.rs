//! Shared helpers for integration tests: booking export fixtures and
//! scoped environment variables.

#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::Mutex;

use serde_json::{json, Value};

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// One booking as it appears in a vendor export.
pub fn booking_json(
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
        "listing_id": 501,
        "owner_id": 42,
        "driver_id": driver_id,
        "vehicle_id": driver_id * 10,
        "type": "booking",
        "status": status,
        "timezone": "Europe/London",
        "title": "Driveway near the station",
        "photos": [],
        "infinite": false,
        "booking_type": "single",
        "auto_pay": false,
        "ev_charging": false,
        "vehicle": { "data": {
            "id": driver_id * 10,
            "make": "Vauxhall",
            "model": "Corsa",
            "registration": format!("XY{}ZZZ", driver_id),
            "colour": null,
            "is_primary": true,
            "auto_pay": false,
            "is_auto_pay_eligible": true
        }},
        "driver": { "data": {
            "id": driver_id,
            "name": format!("Driver {}", driver_id),
            "first_name": "Driver",
            "last_name": driver_id.to_string(),
            "profile_photo": "",
            "is_managed": false,
            "registration_date": "2022-03-01T09:00:00+0000",
            "email": format!("d{}@example.invalid", driver_id),
            "email_verified": true,
            "phone_number": null,
            "phone_number_verified": "2022-03-01T09:05:00+0000",
            "company_name": ""
        }},
        "driver_price": { "data": {
            "id": format!("p{}", id),
            "value": earnings * 1.2,
            "pennies": (earnings * 120.0).round() as i64,
            "currency": "GBP",
            "formatted": format!("£{:.2}", earnings * 1.2)
        }},
        "space_owner_earnings": { "data": {
            "id": format!("e{}", id),
            "value": earnings,
            "pennies": (earnings * 100.0).round() as i64,
            "currency": "GBP",
            "formatted": format!("£{:.2}", earnings)
        }}
    })
}

/// A complete export document.
pub fn export_json(items: Vec<Value>) -> String {
    json!({
        "fetchedAt": "2025-09-10T09:00:00+01:00",
        "total": items.len(),
        "items": items,
    })
    .to_string()
}

/// Three drivers over the first week of June 2025 (BST):
/// - driver 1: two overnight stays and a cancellation
/// - driver 2: a full-day booking on 06-03
/// - driver 3: one short booking on 06-05
pub fn sample_export() -> String {
    export_json(vec![
        booking_json(101, 1, "2025-06-01T20:00:00+01:00", "2025-06-02T08:00:00+01:00", "completed", 12.0),
        booking_json(102, 1, "2025-06-02T20:00:00+01:00", "2025-06-03T08:00:00+01:00", "completed", 12.0),
        booking_json(103, 1, "2025-06-04T20:00:00+01:00", "2025-06-05T08:00:00+01:00", "cancelled", 12.0),
        booking_json(201, 2, "2025-06-03T00:00:00+01:00", "2025-06-04T00:00:00+01:00", "completed", 20.0),
        booking_json(301, 3, "2025-06-05T10:00:00+01:00", "2025-06-05T11:30:00+01:00", "completed", 4.5),
    ])
}

/// Runs `f` with environment variables temporarily modified.
///
/// This is panic-safe (restores variables on unwind) and also serializes access to
/// process-global env vars to avoid flaky tests when Rust runs tests in parallel.
///
/// `changes` is a list of `(key, value)` pairs:
/// - `Some(v)` sets the variable to `v`
/// - `None` removes the variable
pub fn with_scoped_env<F, R>(changes: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_LOCK.lock().expect("ENV_LOCK poisoned");
    let _guard = ScopedEnv::new(changes);
    f()
}

struct ScopedEnv {
    snapshot: Vec<(String, Option<String>)>,
}

impl ScopedEnv {
    fn new(changes: &[(&str, Option<&str>)]) -> Self {
        let keys: HashSet<&str> = changes.iter().map(|(k, _)| *k).collect();
        let snapshot = keys
            .into_iter()
            .map(|k| (k.to_string(), std::env::var(k).ok()))
            .collect::<Vec<_>>();

        for (k, v) in changes {
            match v {
                Some(val) => std::env::set_var(k, val),
                None => std::env::remove_var(k),
            }
        }

        Self { snapshot }
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        for (k, v) in self.snapshot.drain(..) {
            match v {
                Some(val) => std::env::set_var(&k, val),
                None => std::env::remove_var(&k),
            }
        }
    }
}
