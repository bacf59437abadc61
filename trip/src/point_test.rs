use serde_json::json;
use time::macros::datetime;

use super::*;

fn make_point() -> Point {
    Point {
        id: PointId::new("p1"),
        date_from: datetime!(2023-01-01 10:00 UTC),
        date_to: datetime!(2023-01-01 12:30 UTC),
        kind: PointType::CheckIn,
        base_price: 120,
        offers: vec!["o1".into()],
        destination: "d1".into(),
        is_favorite: false,
    }
}

// =============================================================
// PointId
// =============================================================

#[test]
fn point_id_display_and_conversions() {
    let id = PointId::from("42");
    assert_eq!(id.to_string(), "42");
    assert_eq!(id, PointId::new(String::from("42")));
    assert!(!id.is_empty());
    assert!(PointId::default().is_empty());
}

#[test]
fn point_id_serializes_as_plain_string() {
    assert_eq!(serde_json::to_value(PointId::from("7")).unwrap(), json!("7"));
}

// =============================================================
// PointType
// =============================================================

#[test]
fn point_type_serde_kebab_case() {
    assert_eq!(serde_json::to_value(PointType::CheckIn).unwrap(), json!("check-in"));
    let back: PointType = serde_json::from_value(json!("sightseeing")).unwrap();
    assert_eq!(back, PointType::Sightseeing);
}

#[test]
fn point_type_as_str_matches_serde() {
    for kind in PointType::ALL {
        assert_eq!(serde_json::to_value(kind).unwrap(), json!(kind.as_str()));
    }
}

#[test]
fn point_type_label_capitalizes() {
    assert_eq!(PointType::CheckIn.label(), "Check-in");
    assert_eq!(PointType::Taxi.label(), "Taxi");
}

// =============================================================
// Point
// =============================================================

#[test]
fn point_duration() {
    assert_eq!(make_point().duration(), Duration::minutes(150));
}

#[test]
fn toggle_favorite_returns_copy() {
    let point = make_point();
    let toggled = point.with_favorite_toggled();
    assert!(toggled.is_favorite);
    assert!(!point.is_favorite);
    assert_eq!(toggled.id, point.id);
}

#[test]
fn point_deserializes_trip_json() {
    let value = json!({
        "id": "p9",
        "dateFrom": "2023-03-18T10:30:00Z",
        "dateTo": "2023-03-18T11:00:00Z",
        "type": "taxi",
        "basePrice": 20,
        "offers": ["o1", "o2"],
        "destination": "d3",
        "isFavorite": true
    });
    let point: Point = serde_json::from_value(value).unwrap();
    assert_eq!(point.id, PointId::from("p9"));
    assert_eq!(point.kind, PointType::Taxi);
    assert_eq!(point.base_price, 20);
    assert_eq!(point.offers, vec!["o1".to_string(), "o2".to_string()]);
    assert!(point.is_favorite);
    assert_eq!(point.date_from, datetime!(2023-03-18 10:30 UTC));
}

#[test]
fn point_missing_optional_fields_default() {
    let value = json!({
        "id": "p1",
        "dateFrom": "2023-03-18T10:30:00Z",
        "dateTo": "2023-03-18T11:00:00Z",
        "type": "bus",
        "basePrice": 5,
        "destination": "d1"
    });
    let point: Point = serde_json::from_value(value).unwrap();
    assert!(point.offers.is_empty());
    assert!(!point.is_favorite);
}

#[test]
fn point_serializes_camel_case() {
    let value = serde_json::to_value(make_point()).unwrap();
    assert_eq!(value["basePrice"], json!(120));
    assert_eq!(value["type"], json!("check-in"));
    assert_eq!(value["isFavorite"], json!(false));
    assert!(value.get("date_from").is_none());
}
