use super::*;

/// Tests the assigned driver completing their trip.
///
/// Expected: Ok with status completed
#[tokio::test]
async fn assigned_driver_completes_trip() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_trip_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let passenger = create_passenger(db).await?;
    let driver = User::from_entity(create_driver(db).await?).unwrap();
    let trip = TripFactory::new(db, passenger.id)
        .driver_id(driver.id)
        .status("assigned")
        .build()
        .await?;

    let service = TripService::new(db);
    let completed = service.complete(trip.id, &driver).await.unwrap();

    assert_eq!(completed.status, TripStatus::Completed);

    Ok(())
}

/// Tests an admin completing a trip on the driver's behalf.
///
/// Expected: Ok with status completed
#[tokio::test]
async fn admin_completes_trip() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_trip_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let passenger = create_passenger(db).await?;
    let driver = create_driver(db).await?;
    let admin = User::from_entity(create_admin(db).await?).unwrap();
    let trip = TripFactory::new(db, passenger.id)
        .driver_id(driver.id)
        .status("assigned")
        .build()
        .await?;

    let service = TripService::new(db);
    let completed = service.complete(trip.id, &admin).await.unwrap();

    assert_eq!(completed.status, TripStatus::Completed);

    Ok(())
}

/// Tests a different driver trying to complete someone else's trip.
///
/// Expected: Err(AccessDenied)
#[tokio::test]
async fn other_driver_cannot_complete() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_trip_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let passenger = create_passenger(db).await?;
    let assigned_driver = create_driver(db).await?;
    let other_driver = User::from_entity(create_driver(db).await?).unwrap();
    let trip = TripFactory::new(db, passenger.id)
        .driver_id(assigned_driver.id)
        .status("assigned")
        .build()
        .await?;

    let service = TripService::new(db);
    let result = service.complete(trip.id, &other_driver).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_)))
    ));

    Ok(())
}

/// Tests the passenger trying to complete their own trip.
///
/// Only the assigned driver or an admin may close a trip out.
///
/// Expected: Err(AccessDenied)
#[tokio::test]
async fn passenger_cannot_complete() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_trip_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let passenger = User::from_entity(create_passenger(db).await?).unwrap();
    let driver = create_driver(db).await?;
    let trip = TripFactory::new(db, passenger.id)
        .driver_id(driver.id)
        .status("assigned")
        .build()
        .await?;

    let service = TripService::new(db);
    let result = service.complete(trip.id, &passenger).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_)))
    ));

    Ok(())
}

/// Tests completing a trip that never got a driver.
///
/// An admin passes the access check, so the failure must come from the
/// lifecycle itself.
///
/// Expected: Err(InvalidTransition)
#[tokio::test]
async fn pending_trip_cannot_be_completed() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_trip_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let passenger = create_passenger(db).await?;
    let admin = User::from_entity(create_admin(db).await?).unwrap();
    let trip = create_pending_trip(db, passenger.id).await?;

    let service = TripService::new(db);
    let result = service.complete(trip.id, &admin).await;

    assert!(matches!(result, Err(AppError::InvalidTransition(_))));

    Ok(())
}

/// Tests completing a trip that doesn't exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn missing_trip_is_not_found() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_trip_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = User::from_entity(create_admin(db).await?).unwrap();

    let service = TripService::new(db);
    let result = service.complete(42, &admin).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
