//! Database models.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A scheduled appointment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Appointment {
    /// Auto-incrementing ID.
    pub id: i64,
    /// Full name of the person booking.
    pub name: String,
    /// Contact email, if provided.
    pub email: Option<String>,
    /// Contact phone, if provided.
    pub phone: Option<String>,
    /// Appointment datetime in canonical ISO form (YYYY-MM-DDTHH:MM:SS, UTC).
    pub date: String,
    /// Short description or notes.
    pub description: Option<String>,
    /// Creation timestamp.
    pub created_at: String,
    /// Last update timestamp, if ever updated.
    pub updated_at: Option<String>,
}

/// Fields for creating a new appointment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAppointment {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// Canonical ISO datetime.
    pub date: String,
    pub description: Option<String>,
}

/// Partial update for an existing appointment. `None` fields keep their
/// stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppointmentPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// Canonical ISO datetime.
    pub date: Option<String>,
    pub description: Option<String>,
}

/// A stored user/bot exchange, one per chat request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct ChatExchange {
    /// Auto-incrementing ID.
    pub id: i64,
    /// Identifier of the user, if the client supplied one.
    pub user_id: Option<String>,
    /// What the user sent.
    pub user_message: String,
    /// What the bot answered.
    pub bot_response: String,
    /// Creation timestamp.
    pub created_at: String,
}
