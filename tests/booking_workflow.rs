use chamberdesk::core::action::{Action, Effect, update};
use chamberdesk::core::antennas::AntennaRepository;
use chamberdesk::core::error::{Entity, Problem, StoreError};
use chamberdesk::core::features::parse_features;
use chamberdesk::core::model::{
    AntennaDraft, AntennaStatus, AntennaType, BookingDraft, BookingStatus, Location,
};
use chamberdesk::core::request::{BookingRequest, Purpose};
use chamberdesk::core::state::{App, Level};
use chrono::NaiveDate;

// ============================================================================
// Helper Functions
// ============================================================================

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn antenna_draft(name: &str) -> AntennaDraft {
    AntennaDraft {
        name: name.to_string(),
        antenna_type: Some(AntennaType::HighFrequency),
        frequency: "1-30 MHz".to_string(),
        location: Some(Location::North),
        ..AntennaDraft::blank(date(2024, 6, 1))
    }
}

fn booking_draft(antenna_name: &str) -> BookingDraft {
    BookingDraft {
        antenna_name: antenna_name.to_string(),
        requester: "Dr. Ada Park".to_string(),
        date: "2024-07-10".to_string(),
        time: "10:00 - 11:00".to_string(),
        purpose: "Calibration".to_string(),
        ..BookingDraft::default()
    }
}

fn ids(app: &App) -> Vec<u32> {
    app.antennas.list().iter().map(|a| a.id).collect()
}

// ============================================================================
// Antennas
// ============================================================================

#[test]
fn test_create_with_missing_field_leaves_collection_unchanged() {
    let mut repo = AntennaRepository::new();
    let blanks: [fn(&mut AntennaDraft); 4] = [
        |d| d.name = "   ".to_string(),
        |d| d.antenna_type = None,
        |d| d.frequency = String::new(),
        |d| d.location = None,
    ];
    for blank in blanks {
        let mut draft = antenna_draft("X");
        blank(&mut draft);
        assert!(matches!(repo.create(draft), Err(StoreError::Validation(_))));
        assert!(repo.is_empty());
    }
}

#[test]
fn test_create_appends_with_next_id() {
    let mut app = App::seeded();
    let effect = update(&mut app, Action::CreateAntenna(antenna_draft("X")));
    assert_eq!(effect, Effect::CloseForm);
    assert_eq!(ids(&app), vec![1, 2, 3, 4]);
    let created = app.antennas.get(4).expect("created antenna");
    assert_eq!(created.name, "X");
    assert_eq!(created.status, AntennaStatus::Available);
}

#[test]
fn test_delete_middle_antenna() {
    let mut app = App::seeded();
    update(&mut app, Action::DeleteAntenna(2));
    assert_eq!(ids(&app), vec![1, 3]);
}

#[test]
fn test_update_replaces_everything_but_id() {
    let mut repo = AntennaRepository::new();
    repo.create(antenna_draft("A")).expect("create");
    let mut draft = antenna_draft("A2");
    draft.antenna_type = Some(AntennaType::Microwave);
    draft.features = parse_features("Horn, Turntable");
    let updated = repo.update(1, draft).expect("update");
    assert_eq!(updated.id, 1);
    assert_eq!(updated.name, "A2");
    assert_eq!(updated.antenna_type, AntennaType::Microwave);
    assert_eq!(updated.features, vec!["Horn", "Turntable"]);
}

#[test]
fn test_availability_follows_status() {
    let mut repo = AntennaRepository::new();
    let created = repo.create(antenna_draft("A")).expect("create");
    assert_eq!(created.id, 1);
    assert!(created.is_bookable());

    let mut draft = created.to_draft();
    draft.status = AntennaStatus::Occupied;
    let updated = repo.update(1, draft).expect("update");
    assert!(!updated.is_bookable());
}

#[test]
fn test_parse_features_example() {
    assert_eq!(
        parse_features("360° Rotation,  Auto-tracking ,,Weather Resistant"),
        vec!["360° Rotation", "Auto-tracking", "Weather Resistant"]
    );
}

// ============================================================================
// Bookings
// ============================================================================

#[test]
fn test_approve_pending_then_again() {
    let mut app = App::seeded();
    assert_eq!(app.bookings.approve(2).map(|b| b.status), Ok(BookingStatus::Confirmed));
    assert_eq!(
        app.bookings.approve(2).map(|b| b.status),
        Err(StoreError::InvalidTransition {
            id: 2,
            from: BookingStatus::Confirmed,
            to: BookingStatus::Confirmed,
        })
    );
}

#[test]
fn test_reject_unknown_booking() {
    let mut app = App::seeded();
    assert_eq!(
        app.bookings.reject(99).map(|b| b.id),
        Err(StoreError::NotFound { entity: Entity::Booking, id: 99 })
    );
}

#[test]
fn test_new_booking_is_pending_and_edit_is_unguarded() {
    let mut app = App::seeded();
    let mut draft = booking_draft("Polaris Prime");
    draft.status = BookingStatus::Completed;
    update(&mut app, Action::CreateBooking(draft));
    let created = app.bookings.get(3).expect("created booking");
    assert_eq!(created.status, BookingStatus::Pending);

    let mut edit = created.to_draft();
    edit.status = BookingStatus::Completed;
    assert_eq!(update(&mut app, Action::UpdateBooking { id: 3, draft: edit }), Effect::CloseForm);
    assert_eq!(app.bookings.get(3).map(|b| b.status), Some(BookingStatus::Completed));
}

#[test]
fn test_dashboard_stats_follow_writes() {
    let mut app = App::seeded();
    update(&mut app, Action::ApproveBooking(2));
    update(&mut app, Action::CreateBooking(booking_draft("Aurora Array Alpha")));
    let stats = app.stats();
    assert_eq!(stats.total_bookings, 3);
    assert_eq!(stats.pending_bookings, 1);
    assert_eq!(stats.available_antennas, 2);
}

// ============================================================================
// Public requests
// ============================================================================

#[test]
fn test_valid_request_is_not_stored() {
    let mut app = App::seeded();
    let before = app.bookings.list().to_vec();
    let request = BookingRequest {
        name: "Ada Park".to_string(),
        email: "ada@example.com".to_string(),
        phone: "555-0100".to_string(),
        date: "2024-07-05".to_string(),
        start_time: "09:00".to_string(),
        end_time: "11:00".to_string(),
        purpose: Some(Purpose::Testing),
        notes: String::new(),
    };
    let effect = update(
        &mut app,
        Action::SubmitRequest { antenna_id: 3, request, today: date(2024, 7, 1) },
    );
    assert_eq!(effect, Effect::CloseForm);
    assert_eq!(app.bookings.list(), before.as_slice());
    assert_eq!(app.notification.as_ref().map(|n| n.level), Some(Level::Success));
}

#[test]
fn test_blank_request_reports_every_field() {
    let Err(StoreError::Validation(errors)) = BookingRequest::default().validate(date(2024, 7, 1))
    else {
        panic!("expected validation errors");
    };
    let fields: Vec<&str> = errors.iter().map(|e| e.field).collect();
    assert_eq!(
        fields,
        vec!["name", "email", "phone", "date", "start time", "end time", "purpose"]
    );
    assert!(errors.iter().all(|e| e.problem == Problem::Missing));
}
