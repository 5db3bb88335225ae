use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};

use crate::AppState;
use crate::handlers::{admin, auth};
use crate::middleware::auth::auth_middleware;
use crate::middleware::rate_limit::create_public_governor;

pub fn create_router(state: AppState) -> Router {
    // Tight per-IP limiter for the unauthenticated login route
    let public_governor = create_public_governor();

    let auth_routes = Router::new()
        .route("/login", post(auth::login))
        .layer(public_governor);

    // Admin routes (requires a valid bearer token)
    let admin_routes = Router::new()
        // Reference data
        .route("/cities", get(admin::list_cities))
        .route("/cities", post(admin::create_city))
        .route("/cities/{id}", put(admin::update_city))
        .route("/cities/{id}", delete(admin::delete_city))
        .route("/vehicle-types", get(admin::list_vehicle_types))
        .route("/vehicle-types", post(admin::create_vehicle_type))
        .route("/vehicles", get(admin::list_vehicles))
        .route("/vehicles", post(admin::create_vehicle))
        .route("/time-slots", get(admin::list_time_slots))
        .route("/time-slots", post(admin::create_time_slot))
        .route("/time-slots/{id}", delete(admin::delete_time_slot))
        // Trip schedules
        .route("/schedules", get(admin::list_schedules))
        .route("/schedules", post(admin::create_schedule))
        .route("/schedules/{id}", delete(admin::delete_schedule))
        .layer(middleware::from_fn_with_state(state.clone(), auth_middleware));

    Router::new()
        .nest("/api/auth", auth_routes)
        .nest("/api/admin", admin_routes)
        .with_state(state)
}
