use super::*;

/// Tests requesting a trip with valid input.
///
/// The authenticated caller becomes the passenger and the trip starts
/// pending.
///
/// Expected: Ok with a pending trip owned by the caller
#[tokio::test]
async fn creates_pending_trip_for_caller() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_trip_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let passenger = User::from_entity(create_passenger(db).await?).unwrap();

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

    assert_eq!(trip.passenger_id, passenger.id);
    assert_eq!(trip.status, TripStatus::Pending);
    assert!(trip.driver_id.is_none());

    Ok(())
}

/// Tests requesting a trip with bad input.
///
/// Expected: Err(BadRequest) for empty route and negative values
#[tokio::test]
async fn rejects_invalid_input() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_trip_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let passenger = User::from_entity(create_passenger(db).await?).unwrap();

    let service = TripService::new(db);

    let empty_origin = service
        .create(
            RequestTripParam {
                origin: " ".to_string(),
                destination: "Airport".to_string(),
                distance: None,
                price: None,
            },
            &passenger,
        )
        .await;
    assert!(matches!(empty_origin, Err(AppError::BadRequest(_))));

    let negative_distance = service
        .create(
            RequestTripParam {
                origin: "Downtown".to_string(),
                destination: "Airport".to_string(),
                distance: Some(-1.0),
                price: None,
            },
            &passenger,
        )
        .await;
    assert!(matches!(negative_distance, Err(AppError::BadRequest(_))));

    let negative_price = service
        .create(
            RequestTripParam {
                origin: "Downtown".to_string(),
                destination: "Airport".to_string(),
                distance: None,
                price: Some(-0.5),
            },
            &passenger,
        )
        .await;
    assert!(matches!(negative_price, Err(AppError::BadRequest(_))));

    Ok(())
}
