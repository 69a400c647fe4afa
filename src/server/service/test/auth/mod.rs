use crate::server::{
    error::{auth::AuthError, AppError},
    service::auth::{hash_password, Authenticator},
};
use chrono::Duration;
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;
use test_utils::factory::user::UserFactory;

mod authenticate;
