use chrono::{DateTime, FixedOffset, NaiveDate};

use super::*;
use crate::api::BookingId;
use crate::models::interval::BookingInterval;

fn ts(raw: &str) -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339(raw).unwrap()
}

fn interval(id: i64, start: &str, end: &str) -> BookingInterval {
    BookingInterval::new(BookingId::new(id), ts(start), ts(end))
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn days(minutes: &[u32]) -> Vec<DailyOccupancy> {
    minutes
        .iter()
        .enumerate()
        .map(|(i, &m)| DailyOccupancy {
            date: date(2024, 1, 1) + chrono::Duration::days(i as i64),
            occupied_minutes: m,
        })
        .collect()
}

// ==================== compute_daily_occupancy ====================

#[test]
fn test_empty_input_yields_empty_sequence() {
    let daily = compute_daily_occupancy(&[]).unwrap();
    assert!(daily.is_empty());
}

#[test]
fn test_single_interval_within_one_day() {
    let daily = compute_daily_occupancy(&[interval(
        1,
        "2024-01-01T10:00:00Z",
        "2024-01-01T14:00:00Z",
    )])
    .unwrap();

    assert_eq!(daily.len(), 1);
    assert_eq!(daily[0].date, date(2024, 1, 1));
    assert_eq!(daily[0].occupied_minutes, 240);
}

#[test]
fn test_interval_crossing_midnight() {
    let daily = compute_daily_occupancy(&[interval(
        1,
        "2024-01-01T22:00:00Z",
        "2024-01-02T02:00:00Z",
    )])
    .unwrap();

    assert_eq!(daily.len(), 2);
    assert_eq!(daily[0].date, date(2024, 1, 1));
    assert_eq!(daily[0].occupied_minutes, 120);
    assert_eq!(daily[1].date, date(2024, 1, 2));
    assert_eq!(daily[1].occupied_minutes, 120);
}

#[test]
fn test_multi_day_interval_fills_inner_days() {
    let daily = compute_daily_occupancy(&[interval(
        1,
        "2024-01-01T18:00:00Z",
        "2024-01-04T06:30:00Z",
    )])
    .unwrap();

    let minutes: Vec<u32> = daily.iter().map(|d| d.occupied_minutes).collect();
    assert_eq!(minutes, vec![360, 1440, 1440, 390]);
}

#[test]
fn test_overlapping_intervals_saturate_at_full_day() {
    let daily = compute_daily_occupancy(&[
        interval(1, "2024-01-01T00:00:00Z", "2024-01-01T12:00:00Z"),
        interval(2, "2024-01-01T11:00:00Z", "2024-01-02T00:00:00Z"),
    ])
    .unwrap();

    assert_eq!(daily[0].date, date(2024, 1, 1));
    assert_eq!(daily[0].occupied_minutes, MINUTES_PER_DAY);
    // The second booking ends exactly at midnight: the end date is still part
    // of the range, with nothing occupied on it.
    assert_eq!(daily.len(), 2);
    assert_eq!(daily[1].occupied_minutes, 0);
}

#[test]
fn test_partial_overlap_is_summed_below_cap() {
    let daily = compute_daily_occupancy(&[
        interval(1, "2024-01-01T08:00:00Z", "2024-01-01T10:00:00Z"),
        interval(2, "2024-01-01T09:00:00Z", "2024-01-01T11:00:00Z"),
    ])
    .unwrap();

    // Overlap is counted per interval; only the daily total is capped.
    assert_eq!(daily[0].occupied_minutes, 240);
}

#[test]
fn test_gaps_between_bookings_are_zero_filled() {
    let daily = compute_daily_occupancy(&[
        interval(1, "2024-01-01T10:00:00Z", "2024-01-01T11:00:00Z"),
        interval(2, "2024-01-05T10:00:00Z", "2024-01-05T12:00:00Z"),
    ])
    .unwrap();

    assert_eq!(daily.len(), 5);
    let minutes: Vec<u32> = daily.iter().map(|d| d.occupied_minutes).collect();
    assert_eq!(minutes, vec![60, 0, 0, 0, 120]);
    for pair in daily.windows(2) {
        assert_eq!(pair[1].date, pair[0].date.succ_opt().unwrap());
    }
}

#[test]
fn test_input_order_does_not_matter() {
    let a = interval(1, "2024-02-10T10:00:00Z", "2024-02-11T01:00:00Z");
    let b = interval(2, "2024-02-01T07:00:00Z", "2024-02-01T09:15:00Z");
    let c = interval(3, "2024-02-05T23:00:00Z", "2024-02-06T23:00:00Z");

    let forward = compute_daily_occupancy(&[a.clone(), b.clone(), c.clone()]).unwrap();
    let backward = compute_daily_occupancy(&[c, b, a]).unwrap();
    assert_eq!(forward, backward);
    assert_eq!(forward.first().unwrap().date, date(2024, 2, 1));
    assert_eq!(forward.last().unwrap().date, date(2024, 2, 11));
}

#[test]
fn test_day_boundaries_follow_interval_offset() {
    // 23:30 to 01:30 local time in BST is 22:30 to 00:30 UTC.
    let daily = compute_daily_occupancy(&[interval(
        1,
        "2024-07-01T23:30:00+01:00",
        "2024-07-02T01:30:00+01:00",
    )])
    .unwrap();

    assert_eq!(daily.len(), 2);
    assert_eq!(daily[0].date, date(2024, 7, 1));
    assert_eq!(daily[0].occupied_minutes, 30);
    assert_eq!(daily[1].date, date(2024, 7, 2));
    assert_eq!(daily[1].occupied_minutes, 90);
}

#[test]
fn test_end_with_different_offset_uses_start_offset() {
    // Booking across the October clock change: end is expressed in GMT.
    let daily = compute_daily_occupancy(&[interval(
        1,
        "2024-10-26T22:00:00+01:00",
        "2024-10-27T02:00:00+00:00",
    )])
    .unwrap();

    // In +01:00 the end is 03:00 on the 27th: 2h on the 26th, 3h on the 27th.
    let minutes: Vec<u32> = daily.iter().map(|d| d.occupied_minutes).collect();
    assert_eq!(minutes, vec![120, 180]);
}

#[test]
fn test_partial_minutes_are_truncated() {
    let daily = compute_daily_occupancy(&[interval(
        1,
        "2024-01-01T10:00:00Z",
        "2024-01-01T10:01:59Z",
    )])
    .unwrap();
    assert_eq!(daily[0].occupied_minutes, 1);
}

#[test]
fn test_zero_length_interval_is_rejected() {
    let err = compute_daily_occupancy(&[
        interval(1, "2024-01-01T10:00:00Z", "2024-01-01T11:00:00Z"),
        interval(2, "2024-01-01T10:00:00Z", "2024-01-01T10:00:00Z"),
    ])
    .unwrap_err();

    match err {
        OccupancyError::InvalidInterval { id, .. } => assert_eq!(id, BookingId::new(2)),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_reversed_interval_is_rejected() {
    let err = compute_daily_occupancy(&[interval(
        9,
        "2024-01-01T12:00:00Z",
        "2024-01-01T10:00:00Z",
    )])
    .unwrap_err();
    assert!(matches!(err, OccupancyError::InvalidInterval { .. }));
    assert!(err.to_string().contains("invalid interval 9"));
}

#[test]
fn test_daily_is_idempotent() {
    let input = vec![
        interval(1, "2024-03-01T09:00:00Z", "2024-03-03T17:00:00Z"),
        interval(2, "2024-03-02T12:00:00Z", "2024-03-02T13:00:00Z"),
    ];
    let first = compute_daily_occupancy(&input).unwrap();
    let second = compute_daily_occupancy(&input).unwrap();
    assert_eq!(first, second);
}

// ==================== compute_rolling_occupancy ====================

#[test]
fn test_rolling_alternating_days() {
    let rolling = compute_rolling_occupancy(&days(&[1440, 0, 1440, 0]), 2).unwrap();

    assert_eq!(rolling.len(), 3);
    assert_eq!(rolling[0].date, date(2024, 1, 2));
    assert_eq!(rolling[2].date, date(2024, 1, 4));
    for point in &rolling {
        assert_eq!(point.window, 2);
        assert!((point.occupancy - 0.5).abs() < 1e-12);
    }
}

#[test]
fn test_rolling_window_of_one_is_daily_ratio() {
    let daily = days(&[0, 720, 1440]);
    let rolling = compute_rolling_occupancy(&daily, 1).unwrap();
    let ratios: Vec<f64> = rolling.iter().map(|r| r.occupancy).collect();
    assert_eq!(ratios, vec![0.0, 0.5, 1.0]);
}

#[test]
fn test_rolling_window_equal_to_length_is_overall_mean() {
    let daily = days(&[1440, 360, 0, 720]);
    let rolling = compute_rolling_occupancy(&daily, 4).unwrap();

    assert_eq!(rolling.len(), 1);
    assert_eq!(rolling[0].date, date(2024, 1, 4));
    assert!((rolling[0].occupancy - summarize(&daily).mean_occupancy).abs() < 1e-12);
}

#[test]
fn test_rolling_window_longer_than_history_is_empty() {
    let rolling = compute_rolling_occupancy(&days(&[1440, 1440]), 7).unwrap();
    assert!(rolling.is_empty());
}

#[test]
fn test_rolling_empty_input() {
    let rolling = compute_rolling_occupancy(&[], 7).unwrap();
    assert!(rolling.is_empty());
}

#[test]
fn test_rolling_zero_window_is_rejected() {
    let err = compute_rolling_occupancy(&days(&[100]), 0).unwrap_err();
    assert_eq!(err, OccupancyError::InvalidWindow(0));

    let err = compute_rolling_occupancy(&[], 0).unwrap_err();
    assert_eq!(err, OccupancyError::InvalidWindow(0));
}

#[test]
fn test_rolling_values_stay_in_unit_range() {
    let daily = days(&[1440, 1440, 1440, 0, 0, 30, 1440, 900]);
    for window in 1..=daily.len() {
        for point in compute_rolling_occupancy(&daily, window).unwrap() {
            assert!((0.0..=1.0).contains(&point.occupancy));
        }
    }
}

// ==================== series & summary ====================

#[test]
fn test_rolling_series_keeps_request_order() {
    let daily = days(&[1440; 10]);
    let series = rolling_occupancy_series(&daily, &[7, 2]).unwrap();

    assert_eq!(series.len(), 2);
    assert_eq!(series[0].label, "7d");
    assert_eq!(series[0].points.len(), 4);
    assert_eq!(series[1].label, "2d");
    assert_eq!(series[1].points.len(), 9);
}

#[test]
fn test_rolling_series_propagates_invalid_window() {
    let err = rolling_occupancy_series(&days(&[0]), &[7, 0]).unwrap_err();
    assert_eq!(err, OccupancyError::InvalidWindow(0));
}

#[test]
fn test_summary() {
    let summary = summarize(&days(&[1440, 0, 720]));
    assert_eq!(summary.days, 3);
    assert_eq!(summary.total_occupied_minutes, 2160);
    assert!((summary.mean_occupancy - 0.5).abs() < 1e-12);
    assert_eq!(summary.min_occupancy, 0.0);
    assert_eq!(summary.max_occupancy, 1.0);
}

#[test]
fn test_summary_empty() {
    let summary = summarize(&[]);
    assert_eq!(summary.days, 0);
    assert_eq!(summary.mean_occupancy, 0.0);
}
