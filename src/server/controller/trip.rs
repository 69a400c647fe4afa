use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::trip::{CreateTripDto, UpdateTripDto},
    server::{
        controller::user::PaginationParams,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::trip::UpdateTripParam,
        service::trip::{RequestTripParam, TripService},
        state::AppState,
    },
};

/// Request a new trip.
///
/// The authenticated caller becomes the trip's passenger. The trip starts
/// pending with no driver attached.
///
/// # Access Control
/// - Any authenticated user
///
/// # Returns
/// - `201 Created` - The new trip
/// - `400 Bad Request` - Empty origin/destination or negative distance/price
/// - `401 Unauthorized` - Missing or invalid token
pub async fn create_trip(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateTripDto>,
) -> Result<impl IntoResponse, AppError> {
    let passenger = AuthGuard::new(&state.db, &state.auth, &headers)
        .require(&[])
        .await?;

    let service = TripService::new(&state.db);

    let trip = service
        .create(
            RequestTripParam {
                origin: payload.origin,
                destination: payload.destination,
                distance: payload.distance,
                price: payload.price,
            },
            &passenger,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(trip.into_dto())))
}

/// List trips in ascending id order.
///
/// # Access Control
/// - Any authenticated user
///
/// # Returns
/// - `200 OK` - List of trips
/// - `401 Unauthorized` - Missing or invalid token
pub async fn get_trips(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.auth, &headers)
        .require(&[])
        .await?;

    let service = TripService::new(&state.db);

    let trips = service.list(params.skip, params.limit).await?;

    Ok((
        StatusCode::OK,
        Json(trips.into_iter().map(|t| t.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Get a trip by id.
///
/// # Access Control
/// - Any authenticated user
///
/// # Returns
/// - `200 OK` - The trip
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - No trip with that id
pub async fn get_trip_by_id(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(trip_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.auth, &headers)
        .require(&[])
        .await?;

    let service = TripService::new(&state.db);

    let trip = service.get(trip_id).await?;

    Ok((StatusCode::OK, Json(trip.into_dto())))
}

/// Update a trip's route details.
///
/// Status, passenger and driver never change through this endpoint; the
/// lifecycle moves only through assignment and completion.
///
/// # Access Control
/// - The requesting passenger, or an admin
///
/// # Returns
/// - `200 OK` - The updated trip
/// - `400 Bad Request` - Empty origin/destination or negative distance/price
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Actor is neither the passenger nor an admin
/// - `404 Not Found` - No trip with that id
pub async fn update_trip(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(trip_id): Path<i32>,
    Json(payload): Json<UpdateTripDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &state.auth, &headers)
        .require(&[])
        .await?;

    let service = TripService::new(&state.db);

    let trip = service
        .update(
            trip_id,
            UpdateTripParam {
                origin: payload.origin,
                destination: payload.destination,
                distance: payload.distance,
                price: payload.price,
            },
            &actor,
        )
        .await?;

    Ok((StatusCode::OK, Json(trip.into_dto())))
}

/// Delete a trip.
///
/// # Access Control
/// - The requesting passenger, or an admin
///
/// # Returns
/// - `204 No Content` - The trip was deleted
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Actor is neither the passenger nor an admin
/// - `404 Not Found` - No trip with that id
pub async fn delete_trip(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(trip_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &state.auth, &headers)
        .require(&[])
        .await?;

    let service = TripService::new(&state.db);

    service.delete(trip_id, &actor).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Assign a driver to a pending trip.
///
/// # Access Control
/// - `Admin` - Only admins can assign drivers
///
/// # Returns
/// - `200 OK` - The trip, now assigned
/// - `400 Bad Request` - Target user is not a driver
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Actor is not an admin
/// - `404 Not Found` - No such trip or driver
/// - `409 Conflict` - The trip is not pending
pub async fn assign_driver(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((trip_id, driver_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &state.auth, &headers)
        .require(&[Permission::Admin])
        .await?;

    let service = TripService::new(&state.db);

    let trip = service.assign_driver(trip_id, driver_id, &actor).await?;

    Ok((StatusCode::OK, Json(trip.into_dto())))
}

/// Complete an assigned trip.
///
/// # Access Control
/// - The assigned driver, or an admin
///
/// # Returns
/// - `200 OK` - The trip, now completed
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Actor is neither the assigned driver nor an admin
/// - `404 Not Found` - No trip with that id
/// - `409 Conflict` - The trip is not assigned
pub async fn complete_trip(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(trip_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &state.auth, &headers)
        .require(&[])
        .await?;

    let service = TripService::new(&state.db);

    let trip = service.complete(trip_id, &actor).await?;

    Ok((StatusCode::OK, Json(trip.into_dto())))
}
