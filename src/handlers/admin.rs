use axum::{
    Json,
    extract::{Path, State},
};
use serde::Deserialize;

use crate::AppState;
use crate::entities::{city, time_slot, trip_schedule, vehicle, vehicle_type};
use crate::error::AppResult;
use crate::registry::{cities, schedules, time_slots, vehicle_types, vehicles};
use crate::utils::validate::TripInput;

// ============ Cities ============

#[derive(Debug, Deserialize)]
pub struct CityRequest {
    pub name: String,
}

pub async fn list_cities(State(state): State<AppState>) -> AppResult<Json<Vec<city::Model>>> {
    Ok(Json(cities::list(&state.db).await?))
}

pub async fn create_city(
    State(state): State<AppState>,
    Json(payload): Json<CityRequest>,
) -> AppResult<Json<city::Model>> {
    Ok(Json(cities::create(&state.db, &payload.name).await?))
}

pub async fn update_city(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<CityRequest>,
) -> AppResult<Json<city::Model>> {
    Ok(Json(cities::update(&state.db, id, &payload.name).await?))
}

pub async fn delete_city(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<serde_json::Value>> {
    cities::delete(&state.db, id).await?;
    Ok(Json(serde_json::json!({ "message": "City deleted" })))
}

// ============ Vehicle Types ============

#[derive(Debug, Deserialize)]
pub struct VehicleTypeRequest {
    pub name: String,
}

pub async fn list_vehicle_types(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<vehicle_type::Model>>> {
    Ok(Json(vehicle_types::list(&state.db).await?))
}

pub async fn create_vehicle_type(
    State(state): State<AppState>,
    Json(payload): Json<VehicleTypeRequest>,
) -> AppResult<Json<vehicle_type::Model>> {
    Ok(Json(vehicle_types::create(&state.db, &payload.name).await?))
}

// ============ Vehicles ============

#[derive(Debug, Deserialize)]
pub struct VehicleRequest {
    pub vehicle_number: String,
    pub driver_name: String,
}

pub async fn list_vehicles(State(state): State<AppState>) -> AppResult<Json<Vec<vehicle::Model>>> {
    Ok(Json(vehicles::list(&state.db).await?))
}

pub async fn create_vehicle(
    State(state): State<AppState>,
    Json(payload): Json<VehicleRequest>,
) -> AppResult<Json<vehicle::Model>> {
    Ok(Json(
        vehicles::create(&state.db, &payload.vehicle_number, &payload.driver_name).await?,
    ))
}

// ============ Time Slots ============

#[derive(Debug, Deserialize)]
pub struct TimeSlotRequest {
    pub departure_time: String,
    pub arrival_time: String,
}

pub async fn list_time_slots(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<time_slot::Model>>> {
    Ok(Json(time_slots::list(&state.db).await?))
}

pub async fn create_time_slot(
    State(state): State<AppState>,
    Json(payload): Json<TimeSlotRequest>,
) -> AppResult<Json<time_slot::Model>> {
    Ok(Json(
        time_slots::create(&state.db, &payload.departure_time, &payload.arrival_time).await?,
    ))
}

pub async fn delete_time_slot(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<serde_json::Value>> {
    time_slots::delete(&state.db, id).await?;
    Ok(Json(serde_json::json!({ "message": "Time slot deleted" })))
}

// ============ Trip Schedules ============

pub async fn list_schedules(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<trip_schedule::Model>>> {
    Ok(Json(schedules::list(&state.db).await?))
}

pub async fn create_schedule(
    State(state): State<AppState>,
    Json(payload): Json<TripInput>,
) -> AppResult<Json<trip_schedule::Model>> {
    Ok(Json(schedules::create(&state.db, &payload).await?))
}

pub async fn delete_schedule(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<serde_json::Value>> {
    schedules::delete(&state.db, id).await?;
    Ok(Json(serde_json::json!({ "message": "Trip schedule deleted" })))
}
