use axum::{
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/appointments",
            get(handlers::appointment::list_appointments),
        )
        .route(
            "/api/appointments",
            post(handlers::appointment::create_appointment),
        )
        .route(
            "/api/appointments/manage/:token",
            get(handlers::appointment::get_appointment_by_token),
        )
        .route(
            "/api/appointments/manage/:token",
            put(handlers::appointment::update_appointment_by_token),
        )
        .route(
            "/api/appointments/manage/:token",
            delete(handlers::appointment::cancel_appointment_by_token),
        )
        .route(
            "/api/appointments/:id",
            put(handlers::appointment::update_appointment),
        )
        .route(
            "/api/appointments/:id",
            delete(handlers::appointment::cancel_appointment),
        )
}
