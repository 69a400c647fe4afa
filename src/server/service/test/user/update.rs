use super::*;

/// Tests a user updating their own display name.
///
/// Expected: Ok with the new display name
#[tokio::test]
async fn user_updates_own_profile() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let actor = User::from_entity(create_passenger(db).await?).unwrap();

    let service = UserService::new(db);
    let updated = service
        .update(
            actor.id,
            UpdateProfileParam {
                display_name: Some("New Name".to_string()),
                ..Default::default()
            },
            &actor,
        )
        .await
        .unwrap();

    assert_eq!(updated.display_name.as_deref(), Some("New Name"));

    Ok(())
}

/// Tests a user trying to update someone else's profile.
///
/// Expected: Err(AccessDenied)
#[tokio::test]
async fn user_cannot_update_other_profile() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let actor = User::from_entity(create_passenger(db).await?).unwrap();
    let victim = create_passenger(db).await?;

    let service = UserService::new(db);
    let result = service
        .update(
            victim.id,
            UpdateProfileParam {
                display_name: Some("Hacked".to_string()),
                ..Default::default()
            },
            &actor,
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_)))
    ));

    Ok(())
}

/// Tests a non-admin trying to change their own username or disable flag.
///
/// Both fields are admin-only even on the caller's own account.
///
/// Expected: Err(AccessDenied) for both
#[tokio::test]
async fn username_and_disabled_are_admin_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let actor = User::from_entity(create_passenger(db).await?).unwrap();

    let service = UserService::new(db);

    let rename = service
        .update(
            actor.id,
            UpdateProfileParam {
                username: Some("sneaky".to_string()),
                ..Default::default()
            },
            &actor,
        )
        .await;
    assert!(matches!(
        rename,
        Err(AppError::AuthErr(AuthError::AccessDenied(_)))
    ));

    let enable = service
        .update(
            actor.id,
            UpdateProfileParam {
                disabled: Some(false),
                ..Default::default()
            },
            &actor,
        )
        .await;
    assert!(matches!(
        enable,
        Err(AppError::AuthErr(AuthError::AccessDenied(_)))
    ));

    Ok(())
}

/// Tests an admin disabling another account.
///
/// Expected: Ok with disabled set
#[tokio::test]
async fn admin_disables_account() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = User::from_entity(create_admin(db).await?).unwrap();
    let target = create_passenger(db).await?;

    let service = UserService::new(db);
    let updated = service
        .update(
            target.id,
            UpdateProfileParam {
                disabled: Some(true),
                ..Default::default()
            },
            &admin,
        )
        .await
        .unwrap();

    assert!(updated.disabled);

    Ok(())
}

/// Tests updating a user that doesn't exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn missing_user_is_not_found() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = User::from_entity(create_admin(db).await?).unwrap();

    let service = UserService::new(db);
    let result = service
        .update(
            999,
            UpdateProfileParam {
                display_name: Some("Ghost".to_string()),
                ..Default::default()
            },
            &admin,
        )
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
