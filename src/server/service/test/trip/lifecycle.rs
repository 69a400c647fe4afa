use super::*;

/// Tests the full trip lifecycle from request to completion.
///
/// A passenger requests a ride, an admin assigns a driver, and the driver
/// closes the trip out. Each stage must leave the expected state behind.
///
/// Expected: pending, then assigned with the driver bound, then completed
#[tokio::test]
async fn full_lifecycle_from_request_to_completion() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_trip_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let passenger = User::from_entity(create_passenger(db).await?).unwrap();
    let driver = User::from_entity(create_driver(db).await?).unwrap();
    let admin = User::from_entity(create_admin(db).await?).unwrap();

    let service = TripService::new(db);

    let trip = service
        .create(
            RequestTripParam {
                origin: "Downtown".to_string(),
                destination: "Airport".to_string(),
                distance: Some(12.5),
                price: Some(30.0),
            },
            &passenger,
        )
        .await
        .unwrap();
    assert_eq!(trip.status, TripStatus::Pending);

    let assigned = service
        .assign_driver(trip.id, driver.id, &admin)
        .await
        .unwrap();
    assert_eq!(assigned.status, TripStatus::Assigned);
    assert_eq!(assigned.driver_id, Some(driver.id));

    let completed = service.complete(trip.id, &driver).await.unwrap();
    assert_eq!(completed.status, TripStatus::Completed);
    assert_eq!(completed.driver_id, Some(driver.id));
    assert_eq!(completed.passenger_id, passenger.id);

    Ok(())
}

/// Tests that a completed trip is terminal.
///
/// Neither assignment nor a second completion may land once a trip is
/// completed.
///
/// Expected: Err(InvalidTransition) for both
#[tokio::test]
async fn completed_state_is_terminal() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_trip_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let passenger = create_passenger(db).await?;
    let driver = User::from_entity(create_driver(db).await?).unwrap();
    let admin = User::from_entity(create_admin(db).await?).unwrap();
    let trip = TripFactory::new(db, passenger.id)
        .driver_id(driver.id)
        .status("completed")
        .build()
        .await?;

    let service = TripService::new(db);

    let reassign = service.assign_driver(trip.id, driver.id, &admin).await;
    assert!(matches!(reassign, Err(AppError::InvalidTransition(_))));

    let recomplete = service.complete(trip.id, &admin).await;
    assert!(matches!(recomplete, Err(AppError::InvalidTransition(_))));

    Ok(())
}
