use axum::{
    routing::{get, post},
    Router,
};

use crate::server::{
    controller::auth::login,
    controller::trip::{
        assign_driver, complete_trip, create_trip, delete_trip, get_trip_by_id, get_trips,
        update_trip,
    },
    controller::user::{create_user, delete_user, get_user_by_id, get_users, update_user},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/token", post(login))
        .route("/users/", post(create_user).get(get_users))
        .route(
            "/users/{user_id}/",
            get(get_user_by_id).put(update_user).delete(delete_user),
        )
        .route("/trips/", post(create_trip).get(get_trips))
        .route(
            "/trips/{trip_id}/",
            get(get_trip_by_id).put(update_trip).delete(delete_trip),
        )
        .route("/trips/{trip_id}/assign/{driver_id}/", post(assign_driver))
        .route("/trips/{trip_id}/complete/", post(complete_trip))
}
