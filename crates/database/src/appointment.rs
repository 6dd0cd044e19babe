//! Appointment CRUD and range queries.

use sqlx::SqlitePool;

use crate::error::{DatabaseError, Result};
use crate::models::{Appointment, AppointmentPatch, NewAppointment};

const COLUMNS: &str = "id, name, email, phone, date, description, created_at, updated_at";

/// Create a new appointment and return the stored record.
pub async fn create(pool: &SqlitePool, new: &NewAppointment) -> Result<Appointment> {
    let result = sqlx::query(
        r#"
        INSERT INTO appointments (name, email, phone, date, description)
        VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(&new.name)
    .bind(&new.email)
    .bind(&new.phone)
    .bind(&new.date)
    .bind(&new.description)
    .execute(pool)
    .await?;

    get(pool, result.last_insert_rowid()).await
}

/// Get an appointment by ID.
pub async fn get(pool: &SqlitePool, id: i64) -> Result<Appointment> {
    sqlx::query_as::<_, Appointment>(&format!(
        "SELECT {COLUMNS} FROM appointments WHERE id = ?"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| DatabaseError::NotFound {
        entity: "Appointment",
        id: id.to_string(),
    })
}

/// List appointments ordered by date ascending, with offset and limit.
pub async fn list(pool: &SqlitePool, skip: i64, limit: i64) -> Result<Vec<Appointment>> {
    let rows = sqlx::query_as::<_, Appointment>(&format!(
        "SELECT {COLUMNS} FROM appointments ORDER BY date ASC LIMIT ? OFFSET ?"
    ))
    .bind(limit)
    .bind(skip)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// List appointments with `start <= date` (and `date <= end` when given),
/// date ascending. A limit is applied only when positive.
pub async fn list_range(
    pool: &SqlitePool,
    start: &str,
    end: Option<&str>,
    limit: Option<i64>,
) -> Result<Vec<Appointment>> {
    let mut sql = format!("SELECT {COLUMNS} FROM appointments WHERE date >= ?");
    if end.is_some() {
        sql.push_str(" AND date <= ?");
    }
    sql.push_str(" ORDER BY date ASC");
    let limit = limit.filter(|l| *l > 0);
    if limit.is_some() {
        sql.push_str(" LIMIT ?");
    }

    let mut query = sqlx::query_as::<_, Appointment>(&sql).bind(start);
    if let Some(end) = end {
        query = query.bind(end);
    }
    if let Some(limit) = limit {
        query = query.bind(limit);
    }

    Ok(query.fetch_all(pool).await?)
}

/// The most recently scheduled appointments, date descending.
pub async fn recent(pool: &SqlitePool, limit: i64) -> Result<Vec<Appointment>> {
    let rows = sqlx::query_as::<_, Appointment>(&format!(
        "SELECT {COLUMNS} FROM appointments ORDER BY date DESC LIMIT ?"
    ))
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Total number of stored appointments.
pub async fn count(pool: &SqlitePool) -> Result<i64> {
    let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM appointments")
        .fetch_one(pool)
        .await?;

    Ok(total)
}

/// Apply a partial update and return the stored record.
pub async fn update(pool: &SqlitePool, id: i64, patch: &AppointmentPatch) -> Result<Appointment> {
    let current = get(pool, id).await?;

    let name = patch.name.as_ref().unwrap_or(&current.name);
    let email = patch.email.as_ref().or(current.email.as_ref());
    let phone = patch.phone.as_ref().or(current.phone.as_ref());
    let date = patch.date.as_ref().unwrap_or(&current.date);
    let description = patch.description.as_ref().or(current.description.as_ref());

    sqlx::query(
        r#"
        UPDATE appointments
        SET name = ?, email = ?, phone = ?, date = ?, description = ?,
            updated_at = strftime('%Y-%m-%dT%H:%M:%S', 'now')
        WHERE id = ?
        "#,
    )
    .bind(name)
    .bind(email)
    .bind(phone)
    .bind(date)
    .bind(description)
    .bind(id)
    .execute(pool)
    .await?;

    get(pool, id).await
}

/// Delete an appointment by ID.
pub async fn delete(pool: &SqlitePool, id: i64) -> Result<()> {
    let result = sqlx::query("DELETE FROM appointments WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(DatabaseError::NotFound {
            entity: "Appointment",
            id: id.to_string(),
        });
    }

    Ok(())
}
