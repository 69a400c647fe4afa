use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct TripDto {
    pub id: i32,
    pub origin: String,
    pub destination: String,
    pub distance: Option<f64>,
    pub price: Option<f64>,
    pub passenger_id: i32,
    pub driver_id: Option<i32>,
    pub status: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct CreateTripDto {
    pub origin: String,
    pub destination: String,
    pub distance: Option<f64>,
    pub price: Option<f64>,
}

/// Partial update for a trip; absent fields are left untouched.
///
/// Lifecycle fields (status, driver, passenger) are never updatable here —
/// they only move through the assign/complete operations.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default)]
pub struct UpdateTripDto {
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub distance: Option<f64>,
    pub price: Option<f64>,
}
