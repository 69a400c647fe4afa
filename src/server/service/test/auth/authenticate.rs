use super::*;

fn authenticator() -> Authenticator {
    Authenticator::new("test-secret", Duration::minutes(30))
}

/// Tests authenticating with correct credentials.
///
/// Expected: Ok with the matching user
#[tokio::test]
async fn accepts_valid_credentials() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db)
        .username("alice")
        .password_hash(hash_password("hunter2").unwrap())
        .build()
        .await?;

    let user = authenticator()
        .authenticate(db, "alice", "hunter2")
        .await
        .unwrap();

    assert_eq!(user.username, "alice");

    Ok(())
}

/// Tests authenticating with the wrong password.
///
/// Expected: Err(InvalidCredentials)
#[tokio::test]
async fn rejects_wrong_password() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db)
        .username("alice")
        .password_hash(hash_password("hunter2").unwrap())
        .build()
        .await?;

    let result = authenticator().authenticate(db, "alice", "letmein").await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}

/// Tests authenticating an unknown username.
///
/// The reply must be indistinguishable from a wrong password.
///
/// Expected: Err(InvalidCredentials)
#[tokio::test]
async fn rejects_unknown_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = authenticator().authenticate(db, "ghost", "whatever").await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}

/// Tests authenticating an account that has no stored password.
///
/// Bot-registered accounts carry no hash and can never log in over HTTP.
///
/// Expected: Err(InvalidCredentials)
#[tokio::test]
async fn rejects_account_without_password() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db).username("5551234").build().await?;

    let result = authenticator().authenticate(db, "5551234", "").await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}

/// Tests authenticating a disabled account with correct credentials.
///
/// Expected: Err(AccountDisabled), distinct from bad credentials
#[tokio::test]
async fn rejects_disabled_account() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db)
        .username("alice")
        .password_hash(hash_password("hunter2").unwrap())
        .disabled(true)
        .build()
        .await?;

    let result = authenticator().authenticate(db, "alice", "hunter2").await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccountDisabled))
    ));

    Ok(())
}
