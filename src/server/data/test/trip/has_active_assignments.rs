use super::*;

/// Tests detection of a driver bound to an assigned trip.
///
/// Expected: false before assignment, true while assigned, false again once
/// the trip is completed
#[tokio::test]
async fn reflects_assignment_state() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_trip_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let passenger = create_passenger(db).await?;
    let driver = create_passenger(db).await?;

    let repo = TripRepository::new(db);
    let trip = repo
        .create(
            passenger.id,
            CreateTripParam {
                origin: "A".to_string(),
                destination: "B".to_string(),
                distance: None,
                price: None,
            },
        )
        .await
        .unwrap();

    assert!(!repo.has_active_assignments(driver.id).await.unwrap());

    repo.assign_driver(trip.id, driver.id).await.unwrap();
    assert!(repo.has_active_assignments(driver.id).await.unwrap());

    repo.complete(trip.id).await.unwrap();
    assert!(!repo.has_active_assignments(driver.id).await.unwrap());

    Ok(())
}
