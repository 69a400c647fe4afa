use super::*;

/// Tests registering an account through the bot.
///
/// Bot accounts are keyed by the chat platform id, carry the chosen role,
/// and store no password.
///
/// Expected: Ok with username equal to the platform id and no hash
#[tokio::test]
async fn registers_bot_account() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(db);
    let user = service
        .register_external(987654321, Role::Driver, "Alice".to_string())
        .await
        .unwrap();

    assert_eq!(user.username, "987654321");
    assert_eq!(user.role, Role::Driver);
    assert_eq!(user.display_name.as_deref(), Some("Alice"));
    assert!(user.password_hash.is_none());

    Ok(())
}

/// Tests registering the same platform user twice.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn double_registration_is_conflict() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(db);

    service
        .register_external(987654321, Role::Passenger, "Alice".to_string())
        .await
        .unwrap();

    let result = service
        .register_external(987654321, Role::Admin, "Mallory".to_string())
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests resolving a platform id back to its account.
///
/// Expected: Ok(Some) after registration, Ok(None) for a stranger
#[tokio::test]
async fn finds_account_by_platform_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(db);

    let registered = service
        .register_external(111, Role::Passenger, "Bob".to_string())
        .await
        .unwrap();

    let found = service.find_by_platform_id(111).await.unwrap();
    assert_eq!(found.map(|u| u.id), Some(registered.id));

    let missing = service.find_by_platform_id(222).await.unwrap();
    assert!(missing.is_none());

    Ok(())
}
