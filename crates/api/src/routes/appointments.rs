//! Appointment CRUD endpoints.

use agenda_tools::coerce::{parse_datetime, to_canonical};
use axum::extract::{Path, Query, State};
use axum::Json;
use database::{appointment, Appointment, NewAppointment};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::{ApiError, Result};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateAppointment {
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    pub date: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ListParams {
    #[serde(default)]
    pub skip: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    100
}

#[derive(Debug, Serialize)]
pub struct AppointmentList {
    pub appointments: Vec<Appointment>,
    pub total: i64,
}

/// Create a new appointment.
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<CreateAppointment>,
) -> Result<Json<Appointment>> {
    if body.name.trim().is_empty() {
        return Err(ApiError::BadRequest("name must not be empty".to_string()));
    }
    let date = parse_datetime(&body.date)
        .map(to_canonical)
        .ok_or_else(|| ApiError::BadRequest(format!("invalid date: {}", body.date)))?;

    let new = NewAppointment {
        name: body.name,
        email: body.email,
        phone: body.phone,
        date,
        description: body.description,
    };

    let saved = appointment::create(state.db.pool(), &new).await?;
    Ok(Json(saved))
}

/// List appointments ordered by date, with pagination.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<AppointmentList>> {
    let pool = state.db.pool();
    let appointments = appointment::list(pool, params.skip, params.limit).await?;
    let total = appointment::count(pool).await?;

    Ok(Json(AppointmentList {
        appointments,
        total,
    }))
}

/// Get one appointment by ID.
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Appointment>> {
    let found = appointment::get(state.db.pool(), id).await?;
    Ok(Json(found))
}

/// Delete an appointment by ID.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>> {
    appointment::delete(state.db.pool(), id).await?;
    Ok(Json(json!({ "message": "Cita eliminada exitosamente" })))
}
