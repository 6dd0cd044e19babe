//! Save a confirmed appointment.

use async_trait::async_trait;
use database::{appointment, Database, NewAppointment};
use serde_json::Value;
use tracing::info;

use crate::coerce::to_canonical;
use crate::error::ToolError;
use crate::schema::{ParamKind, ParamSpec, ToolDeclaration};
use crate::tool::{Tool, ToolArgs};

static DECLARATION: ToolDeclaration = ToolDeclaration {
    name: "save_appointment",
    description: "Save appointment on database",
    params: &[
        ParamSpec {
            name: "name",
            kind: ParamKind::String,
            required: true,
            description: "Full name of the person booking the appointment.",
        },
        ParamSpec {
            name: "email",
            kind: ParamKind::String,
            required: false,
            description: "Email address (optional).",
        },
        ParamSpec {
            name: "phone",
            kind: ParamKind::String,
            required: false,
            description: "Phone number (optional).",
        },
        ParamSpec {
            name: "date",
            kind: ParamKind::DateTime,
            required: true,
            description: "Appointment datetime in ISO 8601, e.g. 2025-12-07T14:00:00Z.",
        },
        ParamSpec {
            name: "description",
            kind: ParamKind::String,
            required: false,
            description: "Short description or notes (optional).",
        },
    ],
};

/// Persists a new appointment once the model has collected the details.
pub struct SaveAppointment {
    db: Database,
}

impl SaveAppointment {
    /// Create the tool over a database handle.
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl Tool for SaveAppointment {
    fn declaration(&self) -> &'static ToolDeclaration {
        &DECLARATION
    }

    async fn execute(&self, args: ToolArgs) -> Result<Value, ToolError> {
        let name = args.get_string("name")?;
        if name.trim().is_empty() {
            return Err(ToolError::InvalidParameter {
                name: "name".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        let date = to_canonical(args.get_datetime("date")?);

        let new = NewAppointment {
            name,
            email: args.get_string_opt("email"),
            phone: args.get_string_opt("phone"),
            date,
            description: args.get_string_opt("description"),
        };

        let saved = appointment::create(self.db.pool(), &new).await?;
        info!("Saved appointment {} for '{}' at {}", saved.id, saved.name, saved.date);

        Ok(serde_json::to_value(saved)?)
    }
}
