use super::*;

/// Tests the requesting passenger deleting their own trip.
///
/// Expected: Ok and the trip is gone
#[tokio::test]
async fn passenger_deletes_own_trip() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_trip_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let passenger = User::from_entity(create_passenger(db).await?).unwrap();
    let trip = create_pending_trip(db, passenger.id).await?;

    let service = TripService::new(db);
    service.delete(trip.id, &passenger).await.unwrap();

    let result = service.get(trip.id).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests another passenger trying to delete the trip.
///
/// Expected: Err(AccessDenied), trip survives
#[tokio::test]
async fn stranger_cannot_delete_trip() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_trip_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let passenger = create_passenger(db).await?;
    let stranger = User::from_entity(create_passenger(db).await?).unwrap();
    let trip = create_pending_trip(db, passenger.id).await?;

    let service = TripService::new(db);
    let result = service.delete(trip.id, &stranger).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_)))
    ));
    assert!(service.get(trip.id).await.is_ok());

    Ok(())
}

/// Tests deleting a trip that doesn't exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn missing_trip_is_not_found() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_trip_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = User::from_entity(create_admin(db).await?).unwrap();

    let service = TripService::new(db);
    let result = service.delete(99, &admin).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
