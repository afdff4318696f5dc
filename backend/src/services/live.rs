//! Live board: bookings overlapping a date range, tagged with their state
//! relative to "now".

use chrono::{DateTime, FixedOffset, NaiveDate};
use log::debug;

use crate::api::{LiveBooking, LiveState};
use crate::models::booking::Booking;
use crate::models::booking_set::BookingSet;
use crate::services::AnalyticsError;

fn state_at(booking: &Booking, now: DateTime<FixedOffset>) -> LiveState {
    if booking.end_date < now {
        LiveState::Completed
    } else if booking.start_date < now {
        LiveState::InProgress
    } else {
        LiveState::Upcoming
    }
}

fn to_row(booking: &Booking, now: DateTime<FixedOffset>) -> LiveBooking {
    let vehicle = &booking.vehicle.data;
    let driver = &booking.driver.data;
    LiveBooking {
        booking_id: booking.id,
        driver_id: booking.driver_id,
        driver_name: driver.name.clone(),
        phone_number: driver.phone_number.clone(),
        email: driver.email.clone(),
        registration: vehicle.registration.clone(),
        vehicle: format!("{} {}", vehicle.make, vehicle.model),
        colour: vehicle.colour.clone(),
        start: booking.start_date,
        end: booking.end_date,
        duration_minutes: (booking.end_date - booking.start_date).num_minutes(),
        earnings: booking.earnings(),
        paid: booking.paid(),
        state: state_at(booking, now),
    }
}

/// Active bookings touching `[from, to]` (local dates, inclusive), earliest
/// start first.
pub fn live_bookings(
    set: &BookingSet,
    from: NaiveDate,
    to: NaiveDate,
    now: DateTime<FixedOffset>,
) -> Result<Vec<LiveBooking>, AnalyticsError> {
    if from > to {
        return Err(AnalyticsError::InvalidDateRange { from, to });
    }

    let mut rows: Vec<LiveBooking> = set
        .active()
        .filter(|b| b.start_date.date_naive() <= to && b.end_date.date_naive() >= from)
        .map(|b| to_row(b, now))
        .collect();
    rows.sort_by(|a, b| a.start.cmp(&b.start).then(a.booking_id.cmp(&b.booking_id)));

    debug!("{} live bookings between {} and {}", rows.len(), from, to);
    Ok(rows)
}
