//! Update an existing appointment.

use async_trait::async_trait;
use database::{appointment, AppointmentPatch, Database};
use serde_json::Value;
use tracing::info;

use crate::coerce::to_canonical;
use crate::error::ToolError;
use crate::schema::{ParamKind, ParamSpec, ToolDeclaration};
use crate::tool::{Tool, ToolArgs};

static DECLARATION: ToolDeclaration = ToolDeclaration {
    name: "update_appointment",
    description: "Update/modify an existing appointment by ID.",
    params: &[
        ParamSpec {
            name: "appointment_id",
            kind: ParamKind::Integer,
            required: true,
            description: "ID of the appointment to update.",
        },
        ParamSpec {
            name: "name",
            kind: ParamKind::String,
            required: false,
            description: "New full name (optional).",
        },
        ParamSpec {
            name: "email",
            kind: ParamKind::String,
            required: false,
            description: "New email (optional).",
        },
        ParamSpec {
            name: "phone",
            kind: ParamKind::String,
            required: false,
            description: "New phone (optional).",
        },
        ParamSpec {
            name: "date",
            kind: ParamKind::DateTime,
            required: false,
            description: "New appointment datetime in ISO 8601 (optional).",
        },
        ParamSpec {
            name: "description",
            kind: ParamKind::String,
            required: false,
            description: "New description/notes (optional).",
        },
    ],
};

/// Applies a partial update to a stored appointment.
pub struct UpdateAppointment {
    db: Database,
}

impl UpdateAppointment {
    /// Create the tool over a database handle.
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl Tool for UpdateAppointment {
    fn declaration(&self) -> &'static ToolDeclaration {
        &DECLARATION
    }

    async fn execute(&self, args: ToolArgs) -> Result<Value, ToolError> {
        let id = args.get_i64("appointment_id")?;

        let patch = AppointmentPatch {
            name: args.get_string_opt("name"),
            email: args.get_string_opt("email"),
            phone: args.get_string_opt("phone"),
            date: args.get_datetime_opt("date")?.map(to_canonical),
            description: args.get_string_opt("description"),
        };

        let updated = appointment::update(self.db.pool(), id, &patch).await?;
        info!("Updated appointment {}", updated.id);

        Ok(serde_json::to_value(updated)?)
    }
}
