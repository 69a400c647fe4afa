use super::*;
use test_utils::factory::trip::create_pending_trip;

/// Tests paginating trips in id order.
///
/// Expected: Ok with the middle window of trips
#[tokio::test]
async fn returns_requested_window_in_id_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_trip_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let passenger = create_passenger(db).await?;
    let first = create_pending_trip(db, passenger.id).await?;
    let second = create_pending_trip(db, passenger.id).await?;
    let third = create_pending_trip(db, passenger.id).await?;

    let repo = TripRepository::new(db);
    let page = repo.get_paginated(1, 1).await.unwrap();

    assert_eq!(page.len(), 1);
    assert_eq!(page[0].id, second.id);
    assert!(page[0].id > first.id && page[0].id < third.id);

    Ok(())
}

/// Tests paginating an empty table.
///
/// Expected: Ok with an empty page
#[tokio::test]
async fn returns_empty_page_for_empty_table() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_trip_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TripRepository::new(db);
    let page = repo.get_paginated(0, 10).await.unwrap();

    assert!(page.is_empty());

    Ok(())
}
