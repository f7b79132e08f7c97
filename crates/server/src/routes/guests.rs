//! Guest registration endpoints

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use shared::{CreateGuestRequest, DateGuestEntry, GuestRecord, HostGuestEntry, MessageResponse};

use crate::{error::AppError, state::AppState};

/// Register a guest visit
/// POST /api/guests
pub async fn create_guest(
    State(state): State<AppState>,
    payload: Result<Json<CreateGuestRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<GuestRecord>), AppError> {
    let Json(req) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let record = state.guests.create(req).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// List guests registered for a host, oldest first
/// GET /api/guests/by-host/:hostName
pub async fn list_by_host(
    State(state): State<AppState>,
    Path(host_name): Path<String>,
) -> Result<Json<Vec<HostGuestEntry>>, AppError> {
    let guests = state.guests.list_by_host(&host_name).await?;
    Ok(Json(guests))
}

/// List every guest visiting on a date
/// GET /api/guests/by-date/:date
pub async fn list_by_date(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> Result<Json<Vec<DateGuestEntry>>, AppError> {
    let guests = state.guests.list_by_date(&date).await?;
    Ok(Json(guests))
}

/// Delete a guest record
/// DELETE /api/guests/:guestId
pub async fn delete_guest(
    State(state): State<AppState>,
    Path(guest_id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    state.guests.delete(&guest_id).await?;
    Ok(Json(MessageResponse::new("Guest deleted successfully")))
}
