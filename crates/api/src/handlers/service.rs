use axum::{
    extract::{Path, State},
    http::HeaderMap,
    Json,
};
use std::sync::Arc;
use salonbook_core::{
    errors::BookingError,
    models::service::{CreateServiceRequest, Service, UpdateServiceRequest},
};
use uuid::Uuid;

use crate::{middleware::{auth, error_handling::AppError}, ApiState};

#[axum::debug_handler]
pub async fn list_services(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<Service>>, AppError> {
    let services = salonbook_db::repositories::service::get_active_services(&state.db_pool)
        .await
        .map_err(BookingError::Database)?;

    Ok(Json(services.into_iter().map(Service::from).collect()))
}

#[axum::debug_handler]
pub async fn create_service(
    State(state): State<Arc<ApiState>>,
    headers: HeaderMap,
    Json(payload): Json<CreateServiceRequest>,
) -> Result<Json<Service>, AppError> {
    auth::require_admin(&state.config, &headers)?;
    validate_service_fields(Some(payload.duration), Some(payload.price))?;

    let db_service = salonbook_db::repositories::service::create_service(&state.db_pool, &payload)
        .await
        .map_err(BookingError::Database)?;

    Ok(Json(db_service.into()))
}

#[axum::debug_handler]
pub async fn update_service(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    headers: HeaderMap,
    Json(payload): Json<UpdateServiceRequest>,
) -> Result<Json<Service>, AppError> {
    auth::require_admin(&state.config, &headers)?;
    validate_service_fields(payload.duration, payload.price)?;

    // Check that the service exists before updating
    salonbook_db::repositories::service::get_service_by_id(&state.db_pool, id)
        .await
        .map_err(BookingError::Database)?
        .ok_or_else(|| BookingError::NotFound(format!("Service with ID {} not found", id)))?;

    let db_service =
        salonbook_db::repositories::service::update_service(&state.db_pool, id, &payload)
            .await
            .map_err(BookingError::Database)?;

    Ok(Json(db_service.into()))
}

/// Field checks shared by create and update. The slot generator assumes a
/// positive duration, so bad durations must never reach the database.
pub fn validate_service_fields(duration: Option<i32>, price: Option<i32>) -> Result<(), AppError> {
    if let Some(duration) = duration {
        if duration < 1 {
            return Err(AppError(BookingError::Validation(
                "Service duration must be at least one minute".to_string(),
            )));
        }
    }

    if let Some(price) = price {
        if price < 0 {
            return Err(AppError(BookingError::Validation(
                "Service price must not be negative".to_string(),
            )));
        }
    }

    Ok(())
}
