//! Trip data repository for database operations.
//!
//! Besides plain CRUD, this repository implements the lifecycle transitions as
//! conditional updates: the status move only lands when the row's current
//! status still matches the expected pre-state, so two racing writers cannot
//! silently overwrite each other's transition.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::{
    error::AppError,
    model::trip::{CreateTripParam, Trip, TripStatus, UpdateTripParam},
};

/// Repository providing database operations for trips.
pub struct TripRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TripRepository<'a> {
    /// Creates a new TripRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `TripRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new trip owned by the given passenger.
    ///
    /// New trips always start pending with no driver.
    ///
    /// # Arguments
    /// - `passenger_id` - Id of the owning user
    /// - `param` - Route and pass-through distance/price values
    ///
    /// # Returns
    /// - `Ok(Trip)` - The created trip
    /// - `Err(AppError)` - Database error during insert
    pub async fn create(
        &self,
        passenger_id: i32,
        param: CreateTripParam,
    ) -> Result<Trip, AppError> {
        let entity = entity::trip::ActiveModel {
            origin: ActiveValue::Set(param.origin),
            destination: ActiveValue::Set(param.destination),
            distance: ActiveValue::Set(param.distance),
            price: ActiveValue::Set(param.price),
            passenger_id: ActiveValue::Set(passenger_id),
            driver_id: ActiveValue::Set(None),
            status: ActiveValue::Set(TripStatus::Pending.as_str().to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Trip::from_entity(entity)
    }

    /// Gets a trip by primary key.
    ///
    /// # Returns
    /// - `Ok(Some(Trip))` - Trip found
    /// - `Ok(None)` - No trip with that id
    /// - `Err(AppError)` - Database error or corrupt stored status
    pub async fn get_by_id(&self, trip_id: i32) -> Result<Option<Trip>, AppError> {
        let entity = entity::prelude::Trip::find_by_id(trip_id).one(self.db).await?;

        entity.map(Trip::from_entity).transpose()
    }

    /// Gets a page of trips in insertion order.
    ///
    /// # Arguments
    /// - `skip` - Number of records to skip
    /// - `limit` - Maximum number of records to return
    ///
    /// # Returns
    /// - `Ok(Vec<Trip>)` - Trips for the requested window
    /// - `Err(AppError)` - Database error during query
    pub async fn get_paginated(&self, skip: u64, limit: u64) -> Result<Vec<Trip>, AppError> {
        let entities = entity::prelude::Trip::find()
            .order_by_asc(entity::trip::Column::Id)
            .offset(skip)
            .limit(limit)
            .all(self.db)
            .await?;

        entities.into_iter().map(Trip::from_entity).collect()
    }

    /// Applies a partial update to a trip's mutable fields.
    ///
    /// Lifecycle fields are deliberately not reachable from here.
    ///
    /// # Arguments
    /// - `trip_id` - Id of the trip to update
    /// - `param` - Fields to overwrite
    ///
    /// # Returns
    /// - `Ok(Trip)` - The updated trip
    /// - `Err(AppError::NotFound)` - No trip with that id
    pub async fn update(&self, trip_id: i32, param: UpdateTripParam) -> Result<Trip, AppError> {
        let trip = entity::prelude::Trip::find_by_id(trip_id)
            .one(self.db)
            .await?
            .ok_or_else(|| AppError::NotFound("Trip not found".to_string()))?;

        let mut active_model: entity::trip::ActiveModel = trip.into();

        if let Some(origin) = param.origin {
            active_model.origin = ActiveValue::Set(origin);
        }
        if let Some(destination) = param.destination {
            active_model.destination = ActiveValue::Set(destination);
        }
        if let Some(distance) = param.distance {
            active_model.distance = ActiveValue::Set(Some(distance));
        }
        if let Some(price) = param.price {
            active_model.price = ActiveValue::Set(Some(price));
        }

        let updated = active_model.update(self.db).await?;

        Trip::from_entity(updated)
    }

    /// Deletes a trip by primary key.
    ///
    /// # Returns
    /// - `Ok(true)` - Trip deleted
    /// - `Ok(false)` - No trip with that id
    /// - `Err(AppError)` - Database error during delete
    pub async fn delete(&self, trip_id: i32) -> Result<bool, AppError> {
        let result = entity::prelude::Trip::delete_by_id(trip_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Checks whether a user is the bound driver of any assigned trip.
    ///
    /// # Arguments
    /// - `driver_id` - Id of the user to check
    ///
    /// # Returns
    /// - `Ok(true)` - At least one assigned trip references this driver
    /// - `Ok(false)` - No assigned trip references this driver
    /// - `Err(AppError)` - Database error during query
    pub async fn has_active_assignments(&self, driver_id: i32) -> Result<bool, AppError> {
        let count = entity::prelude::Trip::find()
            .filter(entity::trip::Column::DriverId.eq(driver_id))
            .filter(entity::trip::Column::Status.eq(TripStatus::Assigned.as_str()))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Compare-and-swap transition pending → assigned.
    ///
    /// Sets the driver and advances the status in one conditional update that
    /// only matches rows still in the pending state. The losing side of a
    /// race observes zero affected rows.
    ///
    /// # Arguments
    /// - `trip_id` - Id of the trip to transition
    /// - `driver_id` - Id of the driver to bind
    ///
    /// # Returns
    /// - `Ok(rows)` - Number of rows transitioned (0 or 1)
    /// - `Err(AppError)` - Database error during update
    pub async fn assign_driver(&self, trip_id: i32, driver_id: i32) -> Result<u64, AppError> {
        let result = entity::prelude::Trip::update_many()
            .col_expr(entity::trip::Column::DriverId, Expr::value(driver_id))
            .col_expr(
                entity::trip::Column::Status,
                Expr::value(TripStatus::Assigned.as_str()),
            )
            .filter(entity::trip::Column::Id.eq(trip_id))
            .filter(entity::trip::Column::Status.eq(TripStatus::Pending.as_str()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Compare-and-swap transition assigned → completed.
    ///
    /// # Arguments
    /// - `trip_id` - Id of the trip to transition
    ///
    /// # Returns
    /// - `Ok(rows)` - Number of rows transitioned (0 or 1)
    /// - `Err(AppError)` - Database error during update
    pub async fn complete(&self, trip_id: i32) -> Result<u64, AppError> {
        let result = entity::prelude::Trip::update_many()
            .col_expr(
                entity::trip::Column::Status,
                Expr::value(TripStatus::Completed.as_str()),
            )
            .filter(entity::trip::Column::Id.eq(trip_id))
            .filter(entity::trip::Column::Status.eq(TripStatus::Assigned.as_str()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
