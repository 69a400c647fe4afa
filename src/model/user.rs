use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct UserDto {
    pub id: i32,
    pub username: String,
    pub display_name: Option<String>,
    pub role: String,
    pub disabled: bool,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct CreateUserDto {
    pub username: String,
    pub password: String,
    pub display_name: Option<String>,
}

/// Partial update for a user; absent fields are left untouched.
///
/// `username` and `disabled` are only honored for admin callers.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default)]
pub struct UpdateUserDto {
    pub username: Option<String>,
    pub password: Option<String>,
    pub display_name: Option<String>,
    pub disabled: Option<bool>,
}
