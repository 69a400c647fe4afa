use sea_orm::DatabaseConnection;

use crate::server::data::trip::TripRepository;
use crate::server::data::user::UserRepository;
use crate::server::error::auth::AuthError;
use crate::server::error::AppError;
use crate::server::model::trip::{CreateTripParam, Trip, TripStatus, UpdateTripParam};
use crate::server::model::user::{Role, User};

const MAX_PAGE_SIZE: u64 = 100;

/// Parameters for requesting a new trip.
#[derive(Debug, Clone)]
pub struct RequestTripParam {
    pub origin: String,
    pub destination: String,
    pub distance: Option<f64>,
    pub price: Option<f64>,
}

/// Manages the trip lifecycle from request through assignment to completion.
pub struct TripService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TripService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Requests a new trip on behalf of a passenger.
    ///
    /// The trip starts in the pending state with no driver attached.
    ///
    /// # Arguments
    /// - `param` - Origin, destination and optional distance/price
    /// - `passenger` - Authenticated user requesting the ride
    ///
    /// # Returns
    /// - `Ok(Trip)` - The newly created trip
    /// - `Err(AppError::BadRequest)` - Empty origin/destination or a negative
    ///   distance or price
    pub async fn create(
        &self,
        param: RequestTripParam,
        passenger: &User,
    ) -> Result<Trip, AppError> {
        if param.origin.trim().is_empty() {
            return Err(AppError::BadRequest("Origin must not be empty".to_string()));
        }

        if param.destination.trim().is_empty() {
            return Err(AppError::BadRequest(
                "Destination must not be empty".to_string(),
            ));
        }

        if param.distance.is_some_and(|distance| distance < 0.0) {
            return Err(AppError::BadRequest(
                "Distance must not be negative".to_string(),
            ));
        }

        if param.price.is_some_and(|price| price < 0.0) {
            return Err(AppError::BadRequest("Price must not be negative".to_string()));
        }

        let trip_repo = TripRepository::new(self.db);

        trip_repo
            .create(
                passenger.id,
                CreateTripParam {
                    origin: param.origin,
                    destination: param.destination,
                    distance: param.distance,
                    price: param.price,
                },
            )
            .await
    }

    /// Gets a trip by its id.
    ///
    /// # Returns
    /// - `Ok(Trip)` - The trip with the given id
    /// - `Err(AppError::NotFound)` - No trip with that id exists
    pub async fn get(&self, trip_id: i32) -> Result<Trip, AppError> {
        let trip_repo = TripRepository::new(self.db);

        trip_repo
            .get_by_id(trip_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Trip not found".to_string()))
    }

    /// Lists trips in ascending id order.
    ///
    /// # Arguments
    /// - `skip` - Number of trips to skip
    /// - `limit` - Maximum number of trips to return, capped at 100
    pub async fn list(&self, skip: u64, limit: u64) -> Result<Vec<Trip>, AppError> {
        let trip_repo = TripRepository::new(self.db);

        trip_repo.get_paginated(skip, limit.min(MAX_PAGE_SIZE)).await
    }

    /// Updates the mutable fields of a trip.
    ///
    /// Only the requesting passenger or an admin may update a trip. Status,
    /// passenger and driver are managed exclusively through the lifecycle
    /// operations and cannot be changed here.
    ///
    /// # Arguments
    /// - `trip_id` - Id of the trip to update
    /// - `param` - Fields to change; `None` leaves the stored value untouched
    /// - `actor` - Authenticated user performing the update
    ///
    /// # Returns
    /// - `Ok(Trip)` - The updated trip
    /// - `Err(AppError::AuthErr(AccessDenied))` - Actor is neither the
    ///   passenger nor an admin
    /// - `Err(AppError::NotFound)` - No trip with that id exists
    pub async fn update(
        &self,
        trip_id: i32,
        param: UpdateTripParam,
        actor: &User,
    ) -> Result<Trip, AppError> {
        if let Some(ref origin) = param.origin {
            if origin.trim().is_empty() {
                return Err(AppError::BadRequest("Origin must not be empty".to_string()));
            }
        }

        if let Some(ref destination) = param.destination {
            if destination.trim().is_empty() {
                return Err(AppError::BadRequest(
                    "Destination must not be empty".to_string(),
                ));
            }
        }

        if param.distance.is_some_and(|distance| distance < 0.0) {
            return Err(AppError::BadRequest(
                "Distance must not be negative".to_string(),
            ));
        }

        if param.price.is_some_and(|price| price < 0.0) {
            return Err(AppError::BadRequest("Price must not be negative".to_string()));
        }

        let trip = self.get(trip_id).await?;

        if trip.passenger_id != actor.id && !actor.is_admin() {
            return Err(AuthError::AccessDenied(
                "Only the requesting passenger or an admin may update this trip".to_string(),
            )
            .into());
        }

        let trip_repo = TripRepository::new(self.db);

        trip_repo.update(trip_id, param).await
    }

    /// Deletes a trip.
    ///
    /// Only the requesting passenger or an admin may delete a trip.
    ///
    /// # Returns
    /// - `Ok(())` - The trip was deleted
    /// - `Err(AppError::AuthErr(AccessDenied))` - Actor is neither the
    ///   passenger nor an admin
    /// - `Err(AppError::NotFound)` - No trip with that id exists
    pub async fn delete(&self, trip_id: i32, actor: &User) -> Result<(), AppError> {
        let trip = self.get(trip_id).await?;

        if trip.passenger_id != actor.id && !actor.is_admin() {
            return Err(AuthError::AccessDenied(
                "Only the requesting passenger or an admin may delete this trip".to_string(),
            )
            .into());
        }

        let trip_repo = TripRepository::new(self.db);

        let deleted = trip_repo.delete(trip_id).await?;

        if !deleted {
            return Err(AppError::NotFound("Trip not found".to_string()));
        }

        Ok(())
    }

    /// Assigns a driver to a pending trip.
    ///
    /// Only an admin may assign drivers. The assignment is a conditional
    /// update on the pending state, so two concurrent assignments to the same
    /// trip cannot both succeed.
    ///
    /// # Arguments
    /// - `trip_id` - Id of the trip to assign
    /// - `driver_id` - Id of the user to assign as driver
    /// - `actor` - Authenticated user performing the assignment
    ///
    /// # Returns
    /// - `Ok(Trip)` - The trip, now assigned
    /// - `Err(AppError::AuthErr(AccessDenied))` - Actor is not an admin
    /// - `Err(AppError::NotFound)` - No such trip or driver
    /// - `Err(AppError::BadRequest)` - The target user is not a driver
    /// - `Err(AppError::InvalidTransition)` - The trip is not pending
    pub async fn assign_driver(
        &self,
        trip_id: i32,
        driver_id: i32,
        actor: &User,
    ) -> Result<Trip, AppError> {
        if !actor.is_admin() {
            return Err(AuthError::AccessDenied(
                "Only an admin may assign drivers".to_string(),
            )
            .into());
        }

        let user_repo = UserRepository::new(self.db);

        let driver = user_repo
            .find_by_id(driver_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Driver not found".to_string()))?;

        if driver.role != Role::Driver {
            return Err(AppError::BadRequest(format!(
                "User {} is not a driver",
                driver_id
            )));
        }

        let trip_repo = TripRepository::new(self.db);

        let rows_affected = trip_repo.assign_driver(trip_id, driver_id).await?;

        if rows_affected == 0 {
            // Distinguish a missing trip from one that already left the
            // pending state.
            return match trip_repo.get_by_id(trip_id).await? {
                Some(trip) => Err(AppError::InvalidTransition(format!(
                    "Trip {} is {}, expected pending",
                    trip_id,
                    trip.status.as_str()
                ))),
                None => Err(AppError::NotFound("Trip not found".to_string())),
            };
        }

        self.get(trip_id).await
    }

    /// Completes an assigned trip.
    ///
    /// Only the assigned driver or an admin may complete a trip. Like
    /// assignment, completion is a conditional update on the expected
    /// prior state.
    ///
    /// # Arguments
    /// - `trip_id` - Id of the trip to complete
    /// - `actor` - Authenticated user completing the trip
    ///
    /// # Returns
    /// - `Ok(Trip)` - The trip, now completed
    /// - `Err(AppError::AuthErr(AccessDenied))` - Actor is neither the
    ///   assigned driver nor an admin
    /// - `Err(AppError::NotFound)` - No trip with that id exists
    /// - `Err(AppError::InvalidTransition)` - The trip is not assigned
    pub async fn complete(&self, trip_id: i32, actor: &User) -> Result<Trip, AppError> {
        let trip = self.get(trip_id).await?;

        let is_assigned_driver = trip.driver_id == Some(actor.id);

        if !is_assigned_driver && !actor.is_admin() {
            return Err(AuthError::AccessDenied(
                "Only the assigned driver or an admin may complete this trip".to_string(),
            )
            .into());
        }

        let trip_repo = TripRepository::new(self.db);

        let rows_affected = trip_repo.complete(trip_id).await?;

        if rows_affected == 0 {
            return match trip_repo.get_by_id(trip_id).await? {
                Some(trip) => Err(AppError::InvalidTransition(format!(
                    "Trip {} is {}, expected {}",
                    trip_id,
                    trip.status.as_str(),
                    TripStatus::Assigned.as_str()
                ))),
                None => Err(AppError::NotFound("Trip not found".to_string())),
            };
        }

        self.get(trip_id).await
    }
}
