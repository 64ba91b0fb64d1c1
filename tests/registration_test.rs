//! Registration engine integration tests

mod helpers;

use assert_matches::assert_matches;
use serial_test::serial;

use evently::models::Role;
use evently::EventlyError;
use helpers::database_helper::TestDatabase;
use helpers::test_data::{hour, seed_club, seed_event, seed_user};

#[tokio::test]
#[serial]
async fn registering_twice_conflicts() -> anyhow::Result<()> {
    let Some(db) = TestDatabase::try_new().await else { return Ok(()) };
    db.cleanup().await?;

    let repos = db.repositories();
    let services = db.services();

    let club = seed_club(&repos).await?;
    let student = seed_user(&repos, Role::Student).await?;
    let event = seed_event(&repos, club.id, hour(18), hour(20)).await?;

    let student_ctx = services.auth_service.resolve(student.id).await?;

    let attendee = services
        .registration_service
        .register(&student_ctx, event.id)
        .await?;
    assert_eq!(attendee.event_id, event.id);
    assert_eq!(attendee.user_id, student.id);
    assert!(repos.events.is_registered(event.id, student.id).await?);

    // The store constraint is the source of truth for duplicates.
    let second = services
        .registration_service
        .register(&student_ctx, event.id)
        .await;
    assert_matches!(
        second,
        Err(EventlyError::AlreadyRegistered { user_id, event_id })
            if user_id == student.id && event_id == event.id
    );

    // Exactly one attendee record exists.
    assert_eq!(
        services.registration_service.attendee_count(event.id).await?,
        1
    );

    Ok(())
}

#[tokio::test]
#[serial]
async fn concurrent_duplicate_registrations_yield_one_success() -> anyhow::Result<()> {
    let Some(db) = TestDatabase::try_new().await else { return Ok(()) };
    db.cleanup().await?;

    let repos = db.repositories();
    let services = db.services();

    let club = seed_club(&repos).await?;
    let student = seed_user(&repos, Role::Student).await?;
    let event = seed_event(&repos, club.id, hour(18), hour(20)).await?;

    let student_ctx = services.auth_service.resolve(student.id).await?;

    let attempts = futures::future::join_all(vec![
        services.registration_service.register(&student_ctx, event.id),
        services.registration_service.register(&student_ctx, event.id),
    ])
    .await;

    let successes = attempts.iter().filter(|r| r.is_ok()).count();
    let conflicts = attempts
        .iter()
        .filter(|r| matches!(r, Err(EventlyError::AlreadyRegistered { .. })))
        .count();
    assert_eq!(successes, 1);
    assert_eq!(conflicts, 1);

    assert_eq!(
        services.registration_service.attendee_count(event.id).await?,
        1
    );

    Ok(())
}

#[tokio::test]
#[serial]
async fn different_students_register_independently() -> anyhow::Result<()> {
    let Some(db) = TestDatabase::try_new().await else { return Ok(()) };
    db.cleanup().await?;

    let repos = db.repositories();
    let services = db.services();

    let club = seed_club(&repos).await?;
    let event = seed_event(&repos, club.id, hour(18), hour(20)).await?;

    for _ in 0..3 {
        let student = seed_user(&repos, Role::Student).await?;
        let ctx = services.auth_service.resolve(student.id).await?;
        services.registration_service.register(&ctx, event.id).await?;
    }

    assert_eq!(
        services.registration_service.attendee_count(event.id).await?,
        3
    );

    Ok(())
}

#[tokio::test]
#[serial]
async fn only_students_register() -> anyhow::Result<()> {
    let Some(db) = TestDatabase::try_new().await else { return Ok(()) };
    db.cleanup().await?;

    let repos = db.repositories();
    let services = db.services();

    let club = seed_club(&repos).await?;
    let admin = seed_user(&repos, Role::Admin).await?;
    let event = seed_event(&repos, club.id, hour(18), hour(20)).await?;

    let admin_ctx = services.auth_service.resolve(admin.id).await?;

    let result = services.registration_service.register(&admin_ctx, event.id).await;
    assert_matches!(result, Err(EventlyError::PermissionDenied(_)));

    Ok(())
}

#[tokio::test]
#[serial]
async fn registering_for_missing_event_is_not_found() -> anyhow::Result<()> {
    let Some(db) = TestDatabase::try_new().await else { return Ok(()) };
    db.cleanup().await?;

    let repos = db.repositories();
    let services = db.services();

    let student = seed_user(&repos, Role::Student).await?;
    let student_ctx = services.auth_service.resolve(student.id).await?;

    let result = services.registration_service.register(&student_ctx, 999999).await;
    assert_matches!(result, Err(EventlyError::EventNotFound { event_id: 999999 }));

    Ok(())
}

#[tokio::test]
#[serial]
async fn unknown_caller_cannot_resolve_a_context() -> anyhow::Result<()> {
    let Some(db) = TestDatabase::try_new().await else { return Ok(()) };
    db.cleanup().await?;

    let repos = db.repositories();
    let services = db.services();

    let result = services.auth_service.resolve(123456789).await;
    assert_matches!(result, Err(EventlyError::UserNotFound { .. }));

    let result = services.auth_service.resolve_by_email("nobody@test.example").await;
    assert_matches!(result, Err(EventlyError::EmailNotFound { .. }));

    // A known email resolves to the same context as the id.
    let student = seed_user(&repos, Role::Student).await?;
    let ctx = services.auth_service.resolve_by_email(&student.email).await?;
    assert_eq!(ctx.user_id, student.id);
    assert!(ctx.can_register());

    Ok(())
}
