use rollbook_core::db::open_db_in_memory;
use rollbook_core::{
    Action, ContactInput, Controller, KvRecordStore, OverlayKind, CONTACT_CONFIRMATION,
};
use rusqlite::Connection;

fn controller(conn: &Connection) -> Controller<KvRecordStore<'_>> {
    Controller::open(KvRecordStore::try_new(conn).unwrap()).unwrap()
}

fn message(name: &str, email: &str, message: &str) -> ContactInput {
    ContactInput {
        name: name.to_string(),
        email: email.to_string(),
        subject: String::new(),
        message: message.to_string(),
    }
}

#[test]
fn overlays_open_and_close() {
    let conn = open_db_in_memory().unwrap();
    let mut controller = controller(&conn);

    let plan = controller
        .dispatch(Action::OpenOverlay(OverlayKind::Privacy))
        .unwrap();
    let overlay = plan.overlay.expect("privacy overlay should be open");
    assert_eq!(overlay.kind, OverlayKind::Privacy);
    assert_eq!(overlay.title, "Privacy Policy");
    assert!(!overlay.has_contact_form);

    let plan = controller.dispatch(Action::CloseOverlay).unwrap();
    assert!(plan.overlay.is_none());
}

#[test]
fn click_outside_closes_whichever_overlay_is_open() {
    let conn = open_db_in_memory().unwrap();
    let mut controller = controller(&conn);

    controller
        .dispatch(Action::OpenOverlay(OverlayKind::Terms))
        .unwrap();
    let plan = controller.dispatch(Action::ClickOutsideOverlay).unwrap();
    assert!(plan.overlay.is_none());

    // With nothing open the click is a no-op.
    let plan = controller.dispatch(Action::ClickOutsideOverlay).unwrap();
    assert!(plan.overlay.is_none());
}

#[test]
fn opening_another_overlay_replaces_the_current_one() {
    let conn = open_db_in_memory().unwrap();
    let mut controller = controller(&conn);

    controller
        .dispatch(Action::OpenOverlay(OverlayKind::Privacy))
        .unwrap();
    let plan = controller
        .dispatch(Action::OpenOverlay(OverlayKind::Contact))
        .unwrap();

    let overlay = plan.overlay.expect("contact overlay should be open");
    assert_eq!(overlay.kind, OverlayKind::Contact);
    assert!(overlay.has_contact_form);
}

#[test]
fn contact_submission_confirms_and_closes_the_overlay() {
    let conn = open_db_in_memory().unwrap();
    let mut controller = controller(&conn);

    controller
        .dispatch(Action::OpenOverlay(OverlayKind::Contact))
        .unwrap();
    let plan = controller
        .dispatch(Action::SubmitContact(message(
            "Jane Doe",
            "jane@example.com",
            "The table rendering is great.",
        )))
        .unwrap();

    assert_eq!(plan.notice.as_deref(), Some(CONTACT_CONFIRMATION));
    assert!(plan.overlay.is_none());
}

#[test]
fn contact_validation_failure_keeps_the_overlay_open() {
    let conn = open_db_in_memory().unwrap();
    let mut controller = controller(&conn);

    controller
        .dispatch(Action::OpenOverlay(OverlayKind::Contact))
        .unwrap();

    let plan = controller
        .dispatch(Action::SubmitContact(message(
            "Jane Doe",
            "jane@example.com",
            "   ",
        )))
        .unwrap();
    assert!(plan.notice.as_deref().unwrap().contains("message"));
    assert!(plan.overlay.is_some());

    let plan = controller
        .dispatch(Action::SubmitContact(message(
            "Jane Doe",
            "not-an-email",
            "Hello there.",
        )))
        .unwrap();
    assert!(plan
        .notice
        .as_deref()
        .unwrap()
        .contains("valid email address"));
    assert!(plan.overlay.is_some());
}

#[test]
fn contact_submission_without_open_overlay_is_rejected() {
    let conn = open_db_in_memory().unwrap();
    let mut controller = controller(&conn);

    let plan = controller
        .dispatch(Action::SubmitContact(message(
            "Jane Doe",
            "jane@example.com",
            "Hello there.",
        )))
        .unwrap();
    assert!(plan.notice.as_deref().unwrap().contains("not open"));
}
