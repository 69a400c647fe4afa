use super::*;
use test_utils::factory::trip::create_pending_trip;

/// Tests deleting an existing trip.
///
/// Expected: Ok(true) and the trip is gone
#[tokio::test]
async fn deletes_existing_trip() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_trip_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let passenger = create_passenger(db).await?;
    let trip = create_pending_trip(db, passenger.id).await?;

    let repo = TripRepository::new(db);
    let deleted = repo.delete(trip.id).await.unwrap();

    assert!(deleted);
    assert!(repo.get_by_id(trip.id).await.unwrap().is_none());

    Ok(())
}

/// Tests deleting a trip that doesn't exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_trip() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_trip_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TripRepository::new(db);
    let deleted = repo.delete(7).await.unwrap();

    assert!(!deleted);

    Ok(())
}
