//! Seed-data builders for integration tests

use chrono::{DateTime, TimeZone, Utc};
use fake::faker::name::en::FirstName;
use fake::Fake;
use uuid::Uuid;

use evently::database::DatabaseService;
use evently::models::{
    AddMemberRequest, Club, CreateClubRequest, CreateEventRequest, CreateUserRequest,
    CreateVenueRequest, Event, Role, User, Venue,
};

/// A fixed reference day keeps window arithmetic readable in tests.
pub fn hour(h: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, h, 0, 0).unwrap()
}

pub async fn seed_user(db: &DatabaseService, role: Role) -> anyhow::Result<User> {
    let first_name: String = FirstName().fake();
    let email = format!("{}-{}@test.example", role.as_str(), Uuid::new_v4().simple());

    let user = db
        .users
        .create(CreateUserRequest {
            email,
            first_name,
            last_name: Some("Tester".to_string()),
            role,
        })
        .await?;

    Ok(user)
}

pub async fn seed_club(db: &DatabaseService) -> anyhow::Result<Club> {
    let club = db
        .clubs
        .create(CreateClubRequest {
            name: format!("Club {}", Uuid::new_v4().simple()),
            description: Some("Integration test club".to_string()),
        })
        .await?;

    Ok(club)
}

/// A club member user with a membership in the given club
pub async fn seed_club_member(db: &DatabaseService, club_id: i64) -> anyhow::Result<User> {
    let user = seed_user(db, Role::ClubMember).await?;
    db.clubs
        .add_member(AddMemberRequest {
            club_id,
            user_id: user.id,
        })
        .await?;

    Ok(user)
}

pub async fn seed_venue(db: &DatabaseService, capacity: i32) -> anyhow::Result<Venue> {
    let venue = db
        .venues
        .create(CreateVenueRequest {
            name: format!("Hall {}", Uuid::new_v4().simple()),
            location: Some("Main campus".to_string()),
            capacity,
        })
        .await?;

    Ok(venue)
}

pub async fn seed_event(
    db: &DatabaseService,
    club_id: i64,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> anyhow::Result<Event> {
    let event = db
        .events
        .create(
            club_id,
            CreateEventRequest {
                name: format!("Event {}", Uuid::new_v4().simple()),
                description: None,
                start_time: start,
                end_time: end,
            },
        )
        .await?;

    Ok(event)
}
