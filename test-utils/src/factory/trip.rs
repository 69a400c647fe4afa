//! Trip factory for creating test trip entities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test trips with customizable fields.
///
/// Trips require an existing passenger; create one with the user factory and
/// pass its id to `TripFactory::new`.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::{trip::TripFactory, user::create_passenger};
///
/// let passenger = create_passenger(&db).await?;
/// let trip = TripFactory::new(&db, passenger.id)
///     .origin("Airport")
///     .destination("Downtown")
///     .build()
///     .await?;
/// ```
pub struct TripFactory<'a> {
    db: &'a DatabaseConnection,
    origin: String,
    destination: String,
    distance: Option<f64>,
    price: Option<f64>,
    passenger_id: i32,
    driver_id: Option<i32>,
    status: String,
}

impl<'a> TripFactory<'a> {
    /// Creates a new TripFactory with default values.
    ///
    /// Defaults:
    /// - origin: `"A"`, destination: `"B"`
    /// - distance/price: `None`
    /// - driver_id: `None`
    /// - status: `"pending"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `passenger_id` - Id of an existing user owning the trip
    ///
    /// # Returns
    /// - `TripFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, passenger_id: i32) -> Self {
        Self {
            db,
            origin: "A".to_string(),
            destination: "B".to_string(),
            distance: None,
            price: None,
            passenger_id,
            driver_id: None,
            status: "pending".to_string(),
        }
    }

    /// Sets the trip origin.
    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = origin.into();
        self
    }

    /// Sets the trip destination.
    pub fn destination(mut self, destination: impl Into<String>) -> Self {
        self.destination = destination.into();
        self
    }

    /// Sets the recorded distance.
    pub fn distance(mut self, distance: f64) -> Self {
        self.distance = Some(distance);
        self
    }

    /// Sets the recorded price.
    pub fn price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    /// Sets the assigned driver. Pair with `status("assigned")` to satisfy
    /// the lifecycle invariant.
    pub fn driver_id(mut self, driver_id: i32) -> Self {
        self.driver_id = Some(driver_id);
        self
    }

    /// Sets the lifecycle status ("pending", "assigned" or "completed").
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Builds and inserts the trip entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::trip::Model)` - Created trip entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::trip::Model, DbErr> {
        entity::trip::ActiveModel {
            origin: ActiveValue::Set(self.origin),
            destination: ActiveValue::Set(self.destination),
            distance: ActiveValue::Set(self.distance),
            price: ActiveValue::Set(self.price),
            passenger_id: ActiveValue::Set(self.passenger_id),
            driver_id: ActiveValue::Set(self.driver_id),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending trip owned by the given passenger.
///
/// Shorthand for `TripFactory::new(db, passenger_id).build().await`.
pub async fn create_pending_trip(
    db: &DatabaseConnection,
    passenger_id: i32,
) -> Result<entity::trip::Model, DbErr> {
    TripFactory::new(db, passenger_id).build().await
}
