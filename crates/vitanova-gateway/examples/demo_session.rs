//! Walk one student session end to end against a file-backed store.
//!
//! Logs in the demo student, submits a PHQ-9 screening, books a slot with
//! the demo counselor, logs a mood, and prints the resulting view.
//!
//! Usage:
//!   VITANOVA_STORE=/tmp/vitanova.json cargo run -p vitanova-gateway --example demo_session

use std::time::Duration;

use vitanova_core::calendar::AvailabilityCalendar;
use vitanova_core::models::account::Role;
use vitanova_core::models::mood::Mood;
use vitanova_gateway::Gateway;
use vitanova_store::port::FileStore;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let store_path = std::env::var("VITANOVA_STORE")
        .unwrap_or_else(|_| "/tmp/vitanova-demo.json".to_string());
    println!("store: {store_path}");

    // Seed the demo counselor with slots for today and tomorrow.
    let counselor =
        vitanova_directory::login(&FileStore::new(&store_path), "counselor@campus.edu", Role::Counselor)
            .await?;
    let today = jiff::Zoned::now().date();
    let mut calendar = AvailabilityCalendar::new();
    calendar.toggle_slot(today, "10:00 AM");
    calendar.toggle_slot(today.tomorrow()?, "02:00 PM");
    vitanova_directory::update_availability(&FileStore::new(&store_path), counselor.id, calendar)
        .await?;

    // A student session with the original's simulated round-trip delay.
    let student =
        vitanova_directory::login(&FileStore::new(&store_path), "student@campus.edu", Role::Student)
            .await?;
    let gateway = Gateway::new(FileStore::new(&store_path), student)
        .with_latency(Duration::from_millis(300));

    let screening = gateway.submit_screening("phq9", vec![1, 0, 2, 1, 0, 1, 2, 0, 0]).await?;
    println!(
        "screening: {} scored {} ({})",
        screening.tool,
        screening.score,
        screening.risk.label()
    );

    let booking = gateway
        .create_booking(counselor.id, &counselor.name, "Today at 10:00 AM")
        .await?;
    println!("booking: {} — {}", booking.counselor_name, booking.slot);

    if let Err(e) = gateway.log_mood(Mood::Happy).await {
        gateway.report_failure("mood.log", &e);
        println!("{}", e.user_message());
    }

    let view = gateway.personal_view().await;
    println!(
        "view: {} screenings, {} bookings, {} moods, {} videos",
        view.screenings.len(),
        view.bookings.len(),
        view.moods.len(),
        view.videos.len()
    );

    Ok(())
}
