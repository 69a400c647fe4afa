//! Trip domain models and parameters.
//!
//! The `TripStatus` enum owns the lifecycle vocabulary; the stored string
//! form never leaves the repository boundary.

use chrono::{DateTime, Utc};

use crate::{model::trip::TripDto, server::error::AppError};

/// Trip lifecycle state.
///
/// States only advance pending → assigned → completed; there is no
/// cancellation state and no regression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TripStatus {
    Pending,
    Assigned,
    Completed,
}

impl TripStatus {
    /// Parses a status from its stored string form.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(Self::Pending),
            "assigned" => Some(Self::Assigned),
            "completed" => Some(Self::Completed),
            _ => None,
        }
    }

    /// Returns the canonical string form used in storage and DTOs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Assigned => "assigned",
            Self::Completed => "completed",
        }
    }
}

/// Trip record with route, pass-through pricing, and lifecycle state.
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    /// Primary key, immutable.
    pub id: i32,
    pub origin: String,
    pub destination: String,
    /// Caller-supplied distance; recorded, never computed or verified.
    pub distance: Option<f64>,
    /// Caller-supplied price; recorded, never computed or verified.
    pub price: Option<f64>,
    /// Owning passenger, immutable after creation.
    pub passenger_id: i32,
    /// Assigned driver; set exactly once by the assign transition.
    pub driver_id: Option<i32>,
    pub status: TripStatus,
    pub created_at: DateTime<Utc>,
}

impl Trip {
    /// Converts the trip domain model to a DTO for API responses.
    pub fn into_dto(self) -> TripDto {
        TripDto {
            id: self.id,
            origin: self.origin,
            destination: self.destination,
            distance: self.distance,
            price: self.price,
            passenger_id: self.passenger_id,
            driver_id: self.driver_id,
            status: self.status.as_str().to_string(),
        }
    }

    /// Converts an entity model to a trip domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Trip)` - The converted trip domain model
    /// - `Err(AppError::InternalError)` - Stored status string is not a known state
    pub fn from_entity(entity: entity::trip::Model) -> Result<Self, AppError> {
        let status = TripStatus::parse(&entity.status).ok_or_else(|| {
            AppError::InternalError(format!(
                "Trip {} has unknown stored status '{}'",
                entity.id, entity.status
            ))
        })?;

        Ok(Self {
            id: entity.id,
            origin: entity.origin,
            destination: entity.destination,
            distance: entity.distance,
            price: entity.price,
            passenger_id: entity.passenger_id,
            driver_id: entity.driver_id,
            status,
            created_at: entity.created_at,
        })
    }
}

/// Parameters for creating a trip.
///
/// The passenger comes from the authenticated actor, never from the request.
#[derive(Debug, Clone)]
pub struct CreateTripParam {
    pub origin: String,
    pub destination: String,
    pub distance: Option<f64>,
    pub price: Option<f64>,
}

/// Parameters for a partial trip update.
///
/// Lists exactly the mutable fields; lifecycle fields move only through the
/// assign/complete operations.
#[derive(Debug, Clone, Default)]
pub struct UpdateTripParam {
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub distance: Option<f64>,
    pub price: Option<f64>,
}
