use parkplanner_core::{
    DateField, NationalPark, ParkId, Trip, TripId, ValidationError, Visitor, VisitorId,
};
use uuid::Uuid;

#[test]
fn visitor_name_length_bounds() {
    assert!(Visitor::new("A").is_ok());
    assert!(Visitor::new("x".repeat(15)).is_ok());

    assert_eq!(
        Visitor::new("").unwrap_err(),
        ValidationError::VisitorNameLength { len: 0 }
    );
    assert_eq!(
        Visitor::new("x".repeat(16)).unwrap_err(),
        ValidationError::VisitorNameLength { len: 16 }
    );
}

#[test]
fn visitor_rename_validates_and_keeps_old_name_on_failure() {
    let mut visitor = Visitor::new("Alex").unwrap();

    visitor.set_name("x".repeat(16)).unwrap_err();
    assert_eq!(visitor.name(), "Alex");

    visitor.set_name("Sam").unwrap();
    assert_eq!(visitor.name(), "Sam");
}

#[test]
fn park_name_needs_three_characters() {
    assert!(NationalPark::new("Zio").is_ok());
    assert_eq!(
        NationalPark::new("Oz").unwrap_err(),
        ValidationError::ParkNameTooShort { len: 2 }
    );
}

#[test]
fn trip_rejects_short_end_date() {
    let err = Trip::new(
        VisitorId::generate(),
        ParkId::generate(),
        "September 1st",
        "Sep 5",
    )
    .unwrap_err();
    assert_eq!(
        err,
        ValidationError::DateTooShort {
            field: DateField::End,
            len: 5
        }
    );
    assert_eq!(
        err.to_string(),
        "end_date must be at least 7 characters, got 5"
    );
}

#[test]
fn same_name_visitors_are_distinct() {
    let first = Visitor::new("Alex").unwrap();
    let second = Visitor::new("Alex").unwrap();

    assert_ne!(first.id(), second.id());
    assert_ne!(first, second);
}

#[test]
fn trip_serialization_uses_expected_wire_fields() {
    let trip_id =
        TripId::from_uuid(Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap());
    let visitor_id =
        VisitorId::from_uuid(Uuid::parse_str("22222222-2222-4333-8444-555555555555").unwrap());
    let park_id =
        ParkId::from_uuid(Uuid::parse_str("33333333-2222-4333-8444-555555555555").unwrap());
    let trip = Trip::with_id(trip_id, visitor_id, park_id, "October 1st", "October 5th").unwrap();

    let json = serde_json::to_value(&trip).unwrap();
    assert_eq!(json["id"], trip_id.to_string());
    assert_eq!(json["visitor"], visitor_id.to_string());
    assert_eq!(json["national_park"], park_id.to_string());
    assert_eq!(json["start_date"], "October 1st");
    assert_eq!(json["end_date"], "October 5th");

    let decoded: Trip = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, trip);
}

#[test]
fn deserialize_rejects_invalid_visitor_name() {
    let value = serde_json::json!({
        "id": "11111111-2222-4333-8444-555555555555",
        "name": "",
    });

    let err = serde_json::from_value::<Visitor>(value).unwrap_err();
    assert!(
        err.to_string()
            .contains("visitor name must be between 1 and 15 characters, got 0"),
        "unexpected error: {err}"
    );
}

#[test]
fn deserialize_rejects_short_park_name() {
    let value = serde_json::json!({
        "id": "11111111-2222-4333-8444-555555555555",
        "name": "Oz",
        "trips": [],
    });

    let err = serde_json::from_value::<NationalPark>(value).unwrap_err();
    assert!(
        err.to_string()
            .contains("national park name must be at least 3 characters, got 2"),
        "unexpected error: {err}"
    );
}

#[test]
fn deserialized_visitor_starts_without_trips() {
    let value = serde_json::json!({
        "id": "11111111-2222-4333-8444-555555555555",
        "name": "Alex",
        "trips": ["22222222-2222-4333-8444-555555555555"],
    });

    let visitor: Visitor = serde_json::from_value(value).unwrap();
    assert_eq!(visitor.name(), "Alex");
    assert!(visitor.trips().is_empty());
}
