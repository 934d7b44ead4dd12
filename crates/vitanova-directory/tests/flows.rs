use jiff::civil::date;
use uuid::Uuid;

use vitanova_core::calendar::AvailabilityCalendar;
use vitanova_core::models::account::Role;
use vitanova_directory::{
    login, reset_password, sign_up, update_availability, DirectoryError, NewAccount,
};
use vitanova_store::port::MemoryStore;
use vitanova_store::state::load_document;

fn student(email: &str) -> NewAccount {
    NewAccount {
        email: email.to_string(),
        password: "hunter2hunter2".to_string(),
        role: Role::Student,
        name: "Jordan Lee".to_string(),
        age: Some(21),
        phone: Some("9876543210".to_string()),
        emergency_contact: None,
        address: None,
    }
}

#[tokio::test]
async fn sign_up_then_login() {
    let port = MemoryStore::new();
    let created = sign_up(&port, student("jordan@campus.edu")).await.unwrap();
    assert!(created.availability_calendar.is_none());

    let found = login(&port, "jordan@campus.edu", Role::Student).await.unwrap();
    assert_eq!(found.id, created.id);
}

#[tokio::test]
async fn duplicate_email_gets_distinct_message() {
    let port = MemoryStore::new();
    sign_up(&port, student("jordan@campus.edu")).await.unwrap();

    let err = sign_up(&port, student("jordan@campus.edu")).await.unwrap_err();
    assert!(matches!(err, DirectoryError::DuplicateAccount { .. }));
    assert!(err.to_string().contains("already exists"));
}

#[tokio::test]
async fn counselor_sign_up_gets_empty_calendar() {
    let port = MemoryStore::new();
    let mut profile = student("carter@campus.edu");
    profile.role = Role::Counselor;

    let created = sign_up(&port, profile).await.unwrap();
    assert!(created.availability_calendar.is_some_and(|c| c.is_empty()));
}

#[tokio::test]
async fn malformed_input_never_reaches_the_store() {
    let port = MemoryStore::new();

    let bad_email = student("not-an-email");
    assert!(matches!(
        sign_up(&port, bad_email).await.unwrap_err(),
        DirectoryError::Validation(_)
    ));

    let mut bad_phone = student("jordan@campus.edu");
    bad_phone.phone = Some("12345".to_string());
    assert!(matches!(
        sign_up(&port, bad_phone).await.unwrap_err(),
        DirectoryError::Validation(_)
    ));

    assert!(port.contents().is_none(), "nothing should have been persisted");
}

#[tokio::test]
async fn login_with_unknown_credentials_fails() {
    let port = MemoryStore::new();
    let err = login(&port, "nobody@campus.edu", Role::Student).await.unwrap_err();
    assert!(matches!(err, DirectoryError::AccountNotFound));
}

#[tokio::test]
async fn login_with_wrong_role_fails() {
    let port = MemoryStore::new();
    sign_up(&port, student("jordan@campus.edu")).await.unwrap();

    let err = login(&port, "jordan@campus.edu", Role::Counselor).await.unwrap_err();
    assert!(matches!(err, DirectoryError::AccountNotFound));
}

#[tokio::test]
async fn demo_accounts_materialize_on_first_login() {
    let port = MemoryStore::new();

    let student = login(&port, "student@campus.edu", Role::Student).await.unwrap();
    assert_eq!(student.name, "Alex Johnson");

    let counselor = login(&port, "counselor@campus.edu", Role::Counselor).await.unwrap();
    assert_eq!(counselor.name, "Dr. Emily Carter");
    assert!(counselor.availability_calendar.is_some());

    // Second login finds the persisted account instead of reseeding.
    let again = login(&port, "student@campus.edu", Role::Student).await.unwrap();
    assert_eq!(again.id, student.id);
}

#[tokio::test]
async fn reset_password_overwrites_stored_password() {
    let port = MemoryStore::new();
    sign_up(&port, student("jordan@campus.edu")).await.unwrap();

    reset_password(&port, "jordan@campus.edu", "newpass12345").await.unwrap();
    let doc = load_document(&port).await;
    assert_eq!(doc.accounts[0].password, "newpass12345");
}

#[tokio::test]
async fn reset_password_is_lenient_only_for_demo_emails() {
    let port = MemoryStore::new();

    // Demo addresses succeed as a no-op even with no account on file.
    reset_password(&port, "student@campus.edu", "whatever1234").await.unwrap();
    reset_password(&port, "counselor@campus.edu", "whatever1234").await.unwrap();

    let err = reset_password(&port, "stranger@campus.edu", "whatever1234")
        .await
        .unwrap_err();
    assert!(matches!(err, DirectoryError::AccountNotFound));
}

#[tokio::test]
async fn update_availability_prunes_empty_dates() {
    let port = MemoryStore::new();
    let counselor = login(&port, "counselor@campus.edu", Role::Counselor).await.unwrap();

    let mut calendar = AvailabilityCalendar::new();
    calendar.toggle_slot(date(2025, 6, 2), "10:00 AM");
    calendar.toggle_slot(date(2025, 6, 3), "01:00 PM");
    calendar.toggle_slot(date(2025, 6, 3), "01:00 PM");

    let updated = update_availability(&port, counselor.id, calendar).await.unwrap();
    let stored = updated.availability_calendar.unwrap();
    assert!(stored.is_available(date(2025, 6, 2)));
    assert!(!stored.is_available(date(2025, 6, 3)));
    assert_eq!(stored.dates().count(), 1);
}

#[tokio::test]
async fn update_availability_for_unknown_id_fails() {
    let port = MemoryStore::new();
    let err = update_availability(&port, Uuid::new_v4(), AvailabilityCalendar::new())
        .await
        .unwrap_err();
    assert!(matches!(err, DirectoryError::AccountNotFound));
}
