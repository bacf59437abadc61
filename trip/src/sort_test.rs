use proptest::prelude::*;
use time::macros::datetime;
use time::{Duration, OffsetDateTime};

use super::*;
use crate::point::{PointId, PointType};

fn make_point(id: &str, from: OffsetDateTime, minutes: i64, price: u32) -> Point {
    Point {
        id: PointId::from(id),
        date_from: from,
        date_to: from + Duration::minutes(minutes),
        kind: PointType::Flight,
        base_price: price,
        offers: Vec::new(),
        destination: "d1".into(),
        is_favorite: false,
    }
}

fn ids(points: &[Point]) -> Vec<&str> {
    points.iter().map(|p| p.id.as_str()).collect()
}

fn sample() -> Vec<Point> {
    vec![
        make_point("a", datetime!(2023-01-03 09:00 UTC), 30, 300),
        make_point("b", datetime!(2023-01-01 09:00 UTC), 240, 100),
        make_point("c", datetime!(2023-01-02 09:00 UTC), 60, 200),
    ]
}

// =============================================================
// Criteria
// =============================================================

#[test]
fn day_sorts_by_start_ascending() {
    assert_eq!(ids(&sort_points(SortType::Day, &sample())), ["b", "c", "a"]);
}

#[test]
fn time_sorts_by_duration_descending() {
    assert_eq!(ids(&sort_points(SortType::Time, &sample())), ["b", "c", "a"]);
}

#[test]
fn price_sorts_by_base_price_descending() {
    assert_eq!(ids(&sort_points(SortType::Price, &sample())), ["a", "c", "b"]);
}

#[test]
fn ties_break_by_id() {
    let at = datetime!(2023-01-01 00:00 UTC);
    let points = vec![make_point("z", at, 10, 50), make_point("m", at, 10, 50), make_point("a", at, 10, 50)];
    for sort_type in SortType::ALL {
        assert_eq!(ids(&sort_points(sort_type, &points)), ["a", "m", "z"]);
    }
}

#[test]
fn input_is_not_mutated() {
    let points = sample();
    let before = points.clone();
    let _sorted = sort_points(SortType::Price, &points);
    assert_eq!(points, before);
}

#[test]
fn empty_input_sorts_to_empty() {
    for sort_type in SortType::ALL {
        assert!(sort_points(sort_type, &[]).is_empty());
    }
}

#[test]
fn day_scenario_orders_earlier_day_first() {
    let points = vec![
        make_point("1", datetime!(2023-01-02 00:00 UTC), 60, 10),
        make_point("2", datetime!(2023-01-01 00:00 UTC), 60, 10),
    ];
    assert_eq!(ids(&sort_points(SortType::Day, &points)), ["2", "1"]);
}

// =============================================================
// Properties
// =============================================================

fn arb_sort_type() -> impl Strategy<Value = SortType> {
    prop_oneof![Just(SortType::Day), Just(SortType::Time), Just(SortType::Price)]
}

fn arb_points() -> impl Strategy<Value = Vec<Point>> {
    prop::collection::vec((0i64..10_000, 0i64..5_000, 0u32..2_000), 0..24).prop_map(|rows| {
        let base = datetime!(2023-01-01 00:00 UTC);
        rows.into_iter()
            .enumerate()
            .map(|(i, (start, minutes, price))| {
                make_point(&format!("p{i}"), base + Duration::minutes(start), minutes, price)
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn sort_is_a_permutation(sort_type in arb_sort_type(), points in arb_points()) {
        let sorted = sort_points(sort_type, &points);
        prop_assert_eq!(sorted.len(), points.len());
        let mut before: Vec<_> = points.iter().map(|p| p.id.clone()).collect();
        let mut after: Vec<_> = sorted.iter().map(|p| p.id.clone()).collect();
        before.sort();
        after.sort();
        prop_assert_eq!(before, after);
    }

    #[test]
    fn sort_is_deterministic(sort_type in arb_sort_type(), points in arb_points()) {
        prop_assert_eq!(sort_points(sort_type, &points), sort_points(sort_type, &points));
    }

    #[test]
    fn sort_ignores_input_order(sort_type in arb_sort_type(), points in arb_points()) {
        let mut reversed = points.clone();
        reversed.reverse();
        prop_assert_eq!(sort_points(sort_type, &points), sort_points(sort_type, &reversed));
    }

    #[test]
    fn sorted_output_respects_comparator(sort_type in arb_sort_type(), points in arb_points()) {
        let sorted = sort_points(sort_type, &points);
        let cmp = comparator(sort_type);
        for pair in sorted.windows(2) {
            prop_assert_ne!(cmp(&pair[0], &pair[1]), Ordering::Greater);
        }
    }
}
