//! Integration tests for booking, RAC assignment, and the cancellation cascade.

use railseat_core::error::ErrorKind;
use railseat_core::types::{
    BookingOutcome, Direction, Gender, Promotion, RequestType, SeatNumber, Section,
};
use railseat_engine::AllocationEngine;

fn engine_with(seats: &[(i64, Section)]) -> AllocationEngine {
    let mut engine = AllocationEngine::default();
    for &(n, section) in seats {
        engine.add_seat(SeatNumber(n), section).unwrap();
    }
    engine
}

fn occupant_name(engine: &AllocationEngine, n: i64) -> Option<String> {
    engine
        .seat(SeatNumber(n))
        .and_then(|v| v.occupant)
        .map(|p| p.name)
}

#[test]
fn test_full_front_overflows_into_rac() {
    let mut engine = engine_with(&[(1, Section::Front), (2, Section::Front)]);

    assert!(matches!(
        engine.book("A", "m", RequestType::Normal).unwrap(),
        BookingOutcome::Seated { .. }
    ));
    assert!(matches!(
        engine.book("B", "m", RequestType::Normal).unwrap(),
        BookingOutcome::Seated { .. }
    ));

    // Third request: first eligible seat is seat 1.
    assert_eq!(
        engine.book("C", "m", RequestType::Normal).unwrap(),
        BookingOutcome::Rac {
            seat_number: SeatNumber(1)
        }
    );

    // Seat 1's RAC now holds a male; a female goes to the next seat's empty queue.
    assert_eq!(
        engine.book("D", "f", RequestType::Normal).unwrap(),
        BookingOutcome::Rac {
            seat_number: SeatNumber(2)
        }
    );

    // Neither queue accepts a third gender, so the request is waitlisted.
    assert_eq!(
        engine.book("E", "x", RequestType::Normal).unwrap(),
        BookingOutcome::Waitlisted { position: 1 }
    );
}

#[test]
fn test_mismatched_gender_goes_to_waitlist() {
    let mut engine = engine_with(&[(1, Section::Front)]);
    engine.book("A", "m", RequestType::Normal).unwrap();
    engine.book("B", "m", RequestType::Normal).unwrap();

    assert_eq!(
        engine.book("C", "f", RequestType::Normal).unwrap(),
        BookingOutcome::Waitlisted { position: 1 }
    );
    let seat = engine.seat(SeatNumber(1)).unwrap();
    assert_eq!(seat.rac_holders.len(), 1);
    assert_eq!(engine.admin_report().waiting_names, vec!["C"]);
}

#[test]
fn test_rac_holder_beats_waitlist_on_cancel() {
    let mut engine = engine_with(&[(1, Section::Front)]);
    engine.book("A", "m", RequestType::Normal).unwrap();
    // B's gender differs from A's; only the RAC queue's own first holder matters.
    engine.book("B", "f", RequestType::Normal).unwrap();
    assert_eq!(
        engine.book("C", "m", RequestType::Normal).unwrap(),
        BookingOutcome::Waitlisted { position: 1 }
    );

    let report = engine.cancel().unwrap();
    assert_eq!(report.cancelled.name, "A");
    assert_eq!(report.seat_number, SeatNumber(1));
    assert_eq!(
        report.promotion,
        Promotion::Rac(railseat_core::types::Passenger::new("B", Gender::Female))
    );

    assert_eq!(occupant_name(&engine, 1).as_deref(), Some("B"));
    assert_eq!(engine.admin_report().waiting_names, vec!["C"]);
    assert_eq!(engine.ledger(), vec![SeatNumber(1)]);
}

#[test]
fn test_waitlist_promotion_never_uses_another_seats_rac() {
    let mut engine = engine_with(&[(1, Section::Front), (2, Section::Mid)]);
    engine.book("A", "m", RequestType::Normal).unwrap(); // seat 1
    engine.book("B", "m", RequestType::Normal).unwrap(); // seat 2
    engine.book("C", "m", RequestType::Normal).unwrap(); // RAC on seat 1
    engine.book("D", "f", RequestType::Normal).unwrap(); // RAC on seat 2
    engine.book("E", "x", RequestType::Normal).unwrap(); // waitlisted

    // Seat 2 was booked last: its own RAC holder D takes over.
    let first = engine.cancel().unwrap();
    assert_eq!(first.seat_number, SeatNumber(2));
    assert!(matches!(first.promotion, Promotion::Rac(ref p) if p.name == "D"));

    // Seat 2 again; its RAC is empty so E comes off the waiting list even
    // though seat 1 still has C in RAC.
    let second = engine.cancel().unwrap();
    assert_eq!(second.cancelled.name, "D");
    assert!(matches!(second.promotion, Promotion::Waitlist(ref p) if p.name == "E"));
    assert_eq!(engine.ledger(), vec![SeatNumber(1), SeatNumber(2)]);
    assert_eq!(
        engine.seat(SeatNumber(1)).unwrap().rac_holders[0].name,
        "C"
    );
}

#[test]
fn test_cancel_is_last_in_first_out() {
    let mut engine = engine_with(&[(1, Section::Front), (2, Section::Mid)]);
    engine.book("A", "m", RequestType::Normal).unwrap();
    engine.book("B", "m", RequestType::Normal).unwrap();

    let report = engine.cancel().unwrap();
    assert_eq!(report.cancelled.name, "B");
    assert_eq!(report.section, Section::Mid);
    assert_eq!(report.promotion, Promotion::SeatFreed);
    assert!(!engine.seat(SeatNumber(2)).unwrap().is_booked());
    assert_eq!(engine.ledger(), vec![SeatNumber(1)]);

    let report = engine.cancel().unwrap();
    assert_eq!(report.cancelled.name, "A");
    assert!(engine.ledger().is_empty());
}

#[test]
fn test_cancel_on_empty_ledger_changes_nothing() {
    let mut engine = engine_with(&[(3, Section::Rear), (1, Section::Front)]);
    let report_before = engine.admin_report();
    let map_before = engine.seat_map();
    let cursor_before = engine.section_cursor();

    let err = engine.cancel().unwrap_err();
    assert_eq!(err.kind, ErrorKind::EmptyLedger);

    assert_eq!(engine.admin_report(), report_before);
    assert_eq!(engine.seat_map(), map_before);
    assert_eq!(engine.section_cursor(), cursor_before);
}

#[test]
fn test_tatkal_promoted_before_normal() {
    let mut engine = engine_with(&[(1, Section::Front)]);
    engine.book("A", "m", RequestType::Normal).unwrap();
    engine.book("R1", "m", RequestType::Normal).unwrap();
    engine.book("R2", "m", RequestType::Normal).unwrap();
    engine.book("N1", "m", RequestType::Normal).unwrap();
    engine.book("N2", "m", RequestType::Normal).unwrap();
    engine.book("T1", "m", RequestType::Tatkal).unwrap();
    engine.book("T2", "m", RequestType::Tatkal).unwrap();

    assert_eq!(
        engine.admin_report().waiting_names,
        vec!["T2", "T1", "N1", "N2"]
    );

    let mut successors = Vec::new();
    while let Ok(report) = engine.cancel() {
        successors.push(match report.promotion {
            Promotion::Rac(p) => format!("rac:{}", p.name),
            Promotion::Waitlist(p) => format!("wl:{}", p.name),
            Promotion::SeatFreed => "free".to_string(),
        });
    }

    assert_eq!(
        successors,
        vec!["rac:R1", "rac:R2", "wl:T2", "wl:T1", "wl:N1", "wl:N2", "free"]
    );
    assert!(!engine.seat(SeatNumber(1)).unwrap().is_booked());
}

#[test]
fn test_cursor_full_house_wraps_per_call() {
    let mut engine = engine_with(&[(1, Section::Front)]);
    engine.book("A", "m", RequestType::Normal).unwrap();
    let cursor = engine.section_cursor();
    let attempts = engine.section_attempts();

    for i in 0..5 {
        engine
            .book(format!("W{i}"), "m", RequestType::Normal)
            .unwrap();
    }

    assert_eq!(engine.section_attempts(), attempts + 5 * 3);
    assert_eq!(engine.section_cursor(), cursor);
}

#[test]
fn test_rotation_and_admin_report() {
    let mut engine = engine_with(&[(1, Section::Front), (2, Section::Mid), (3, Section::Rear)]);
    assert_eq!(
        engine.rotate(Direction::Left),
        vec![SeatNumber(2), SeatNumber(3), SeatNumber(1)]
    );
    assert_eq!(
        engine.rotate(Direction::Right),
        vec![SeatNumber(1), SeatNumber(2), SeatNumber(3)]
    );
    assert_eq!(
        engine.rotate(Direction::Right),
        vec![SeatNumber(3), SeatNumber(1), SeatNumber(2)]
    );

    let mut engine = engine_with(&[
        (50, Section::Front),
        (20, Section::Mid),
        (80, Section::Rear),
        (10, Section::Front),
    ]);
    let report = engine.admin_report();
    assert_eq!(
        report.in_order,
        vec![SeatNumber(10), SeatNumber(20), SeatNumber(50), SeatNumber(80)]
    );
    assert_eq!(
        report.level_order,
        vec![SeatNumber(50), SeatNumber(20), SeatNumber(80), SeatNumber(10)]
    );
    assert!(report.waiting_names.is_empty());

    // Booking state never changes the index order.
    engine.book("A", "m", RequestType::Normal).unwrap();
    assert_eq!(engine.admin_report().in_order, report.in_order);
}

#[test]
fn test_duplicate_seat_rejected() {
    let mut engine = engine_with(&[(1, Section::Front)]);
    let err = engine.add_seat(SeatNumber(1), Section::Rear).unwrap_err();
    assert_eq!(err.kind, ErrorKind::DuplicateSeat);
    assert_eq!(engine.seat_count(), 1);
    assert_eq!(engine.rotation_order(), vec![SeatNumber(1)]);
}

#[test]
fn test_history_exports_as_json() {
    let mut engine = engine_with(&[(1, Section::Front)]);
    engine.book("A", "m", RequestType::Normal).unwrap();
    engine.cancel().unwrap();

    let json = serde_json::to_value(engine.history()).unwrap();
    let types: Vec<_> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["event"]["type"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(types, vec!["SeatAdded", "Seated", "Cancelled", "SeatFreed"]);
}
