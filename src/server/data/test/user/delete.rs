use super::*;
use test_utils::factory::user::create_passenger;

/// Tests deleting an existing user.
///
/// Expected: Ok(true) and the user is gone
#[tokio::test]
async fn deletes_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_passenger(db).await?;

    let repo = UserRepository::new(db);
    let deleted = repo.delete(user.id).await.unwrap();

    assert!(deleted);
    assert!(repo.find_by_id(user.id).await.unwrap().is_none());

    Ok(())
}

/// Tests deleting a user that doesn't exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let deleted = repo.delete(42).await.unwrap();

    assert!(!deleted);

    Ok(())
}
