use crate::server::{
    data::trip::TripRepository,
    error::AppError,
    model::trip::{CreateTripParam, TripStatus, UpdateTripParam},
};
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;
use test_utils::factory::user::create_passenger;

mod delete;
mod get_paginated;
mod has_active_assignments;
