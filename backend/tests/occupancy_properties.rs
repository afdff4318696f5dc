//! Property tests for the occupancy engine.

use chrono::{DateTime, Duration, FixedOffset, TimeZone};
use proptest::prelude::*;

use justpark_analytics::api::{BookingId, BookingInterval};
use justpark_analytics::services::occupancy::{
    compute_daily_occupancy, compute_rolling_occupancy, MINUTES_PER_DAY,
};

fn interval_strategy() -> impl Strategy<Value = (i64, i64, i32)> {
    // (start minute offset, duration minutes, utc offset hours)
    (0i64..30_000, 1i64..6_000, 0i32..=1)
}

fn build(shapes: &[(i64, i64, i32)]) -> Vec<BookingInterval> {
    shapes
        .iter()
        .enumerate()
        .map(|(i, &(start, duration, offset_hours))| {
            let offset = FixedOffset::east_opt(offset_hours * 3600).unwrap();
            let base: DateTime<FixedOffset> = offset
                .with_ymd_and_hms(2024, 3, 1, 0, 0, 0)
                .single()
                .unwrap();
            let start = base + Duration::minutes(start);
            BookingInterval::new(
                BookingId::new(i as i64 + 1),
                start,
                start + Duration::minutes(duration),
            )
        })
        .collect()
}

proptest! {
    #[test]
    fn daily_is_gapless_capped_and_bounded(shapes in prop::collection::vec(interval_strategy(), 1..20)) {
        let intervals = build(&shapes);
        let daily = compute_daily_occupancy(&intervals).unwrap();

        prop_assert!(!daily.is_empty());
        for pair in daily.windows(2) {
            prop_assert_eq!(pair[1].date, pair[0].date.succ_opt().unwrap());
        }
        for day in &daily {
            prop_assert!(day.occupied_minutes <= MINUTES_PER_DAY);
        }

        let first = intervals.iter().map(|i| i.start.date_naive()).min().unwrap();
        let last = intervals
            .iter()
            .map(|i| i.end.with_timezone(i.start.offset()).date_naive())
            .max()
            .unwrap();
        prop_assert_eq!(daily.first().unwrap().date, first);
        prop_assert_eq!(daily.last().unwrap().date, last);

        let booked: i64 = shapes.iter().map(|s| s.1).sum();
        let occupied: i64 = daily.iter().map(|d| d.occupied_minutes as i64).sum();
        prop_assert!(occupied <= booked);
    }

    #[test]
    fn single_interval_minutes_are_conserved(one in interval_strategy()) {
        let daily = compute_daily_occupancy(&build(&[one])).unwrap();
        let occupied: i64 = daily.iter().map(|d| d.occupied_minutes as i64).sum();
        prop_assert_eq!(occupied, one.1);
    }

    #[test]
    fn daily_ignores_input_order(shapes in prop::collection::vec(interval_strategy(), 1..12)) {
        let forward = build(&shapes);
        let mut backward = forward.clone();
        backward.reverse();
        prop_assert_eq!(
            compute_daily_occupancy(&forward).unwrap(),
            compute_daily_occupancy(&backward).unwrap()
        );
    }

    #[test]
    fn rolling_drops_partial_windows(
        shapes in prop::collection::vec(interval_strategy(), 1..12),
        window in 1usize..15,
    ) {
        let daily = compute_daily_occupancy(&build(&shapes)).unwrap();
        let rolling = compute_rolling_occupancy(&daily, window).unwrap();

        prop_assert_eq!(rolling.len(), daily.len().saturating_sub(window - 1));
        for (point, day) in rolling.iter().zip(daily.iter().skip(window - 1)) {
            prop_assert_eq!(point.date, day.date);
            prop_assert!((0.0..=1.0).contains(&point.occupancy));
        }

        if let Some(last) = rolling.last() {
            let tail: u64 = daily[daily.len() - window..]
                .iter()
                .map(|d| d.occupied_minutes as u64)
                .sum();
            let expected = tail as f64 / (window as f64 * MINUTES_PER_DAY as f64);
            prop_assert!((last.occupancy - expected).abs() < 1e-9);
        }
    }
}
