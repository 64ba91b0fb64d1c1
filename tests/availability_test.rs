//! Availability checker integration tests
//!
//! Half-open interval semantics against a real store: only approved
//! bookings block a slot, and touching endpoints never conflict.

mod helpers;

use assert_matches::assert_matches;
use serial_test::serial;

use evently::models::{Role, TimeWindow};
use evently::EventlyError;
use helpers::database_helper::TestDatabase;
use helpers::test_data::{hour, seed_club, seed_club_member, seed_event, seed_user, seed_venue};

#[tokio::test]
#[serial]
async fn venue_without_bookings_is_available() -> anyhow::Result<()> {
    let Some(db) = TestDatabase::try_new().await else { return Ok(()) };
    db.cleanup().await?;

    let repos = db.repositories();
    let services = db.services();

    let venue = seed_venue(&repos, 100).await?;
    let window = TimeWindow::new(hour(10), hour(12))?;

    assert!(services.availability_service.check(venue.id, window).await?);

    Ok(())
}

#[tokio::test]
#[serial]
async fn pending_bookings_do_not_block() -> anyhow::Result<()> {
    let Some(db) = TestDatabase::try_new().await else { return Ok(()) };
    db.cleanup().await?;

    let repos = db.repositories();
    let services = db.services();

    let club = seed_club(&repos).await?;
    let member = seed_club_member(&repos, club.id).await?;
    let venue = seed_venue(&repos, 100).await?;
    let event = seed_event(&repos, club.id, hour(10), hour(12)).await?;

    let member_ctx = services.auth_service.resolve(member.id).await?;
    services
        .booking_service
        .request(&member_ctx, event.id, venue.id)
        .await?;

    let window = TimeWindow::new(hour(10), hour(12))?;
    assert!(services.availability_service.check(venue.id, window).await?);

    Ok(())
}

#[tokio::test]
#[serial]
async fn approved_booking_blocks_overlapping_windows_only() -> anyhow::Result<()> {
    let Some(db) = TestDatabase::try_new().await else { return Ok(()) };
    db.cleanup().await?;

    let repos = db.repositories();
    let services = db.services();

    let club = seed_club(&repos).await?;
    let member = seed_club_member(&repos, club.id).await?;
    let admin = seed_user(&repos, Role::Admin).await?;
    let venue = seed_venue(&repos, 100).await?;
    let event = seed_event(&repos, club.id, hour(10), hour(12)).await?;

    let member_ctx = services.auth_service.resolve(member.id).await?;
    let admin_ctx = services.auth_service.resolve(admin.id).await?;

    let booking = services
        .booking_service
        .request(&member_ctx, event.id, venue.id)
        .await?;
    services.booking_service.approve(&admin_ctx, booking.id).await?;

    // Overlapping windows are blocked.
    let overlapping = TimeWindow::new(hour(11), hour(13))?;
    assert!(!services.availability_service.check(venue.id, overlapping).await?);

    let contained = TimeWindow::new(hour(10), hour(11))?;
    assert!(!services.availability_service.check(venue.id, contained).await?);

    // Touching endpoints are not an overlap.
    let after = TimeWindow::new(hour(12), hour(14))?;
    assert!(services.availability_service.check(venue.id, after).await?);

    let before = TimeWindow::new(hour(8), hour(10))?;
    assert!(services.availability_service.check(venue.id, before).await?);

    Ok(())
}

#[tokio::test]
#[serial]
async fn unknown_venue_is_not_found() -> anyhow::Result<()> {
    let Some(db) = TestDatabase::try_new().await else { return Ok(()) };
    db.cleanup().await?;

    let services = db.services();
    let window = TimeWindow::new(hour(10), hour(12))?;

    let result = services.availability_service.check(987654, window).await;
    assert_matches!(result, Err(EventlyError::VenueNotFound { venue_id: 987654 }));

    Ok(())
}
