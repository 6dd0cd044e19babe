//! Delete an appointment.

use async_trait::async_trait;
use database::{appointment, Database};
use serde_json::{json, Value};
use tracing::info;

use crate::error::ToolError;
use crate::schema::{ParamKind, ParamSpec, ToolDeclaration};
use crate::tool::{Tool, ToolArgs};

static DECLARATION: ToolDeclaration = ToolDeclaration {
    name: "delete_appointment",
    description: "Delete an appointment by ID.",
    params: &[ParamSpec {
        name: "appointment_id",
        kind: ParamKind::Integer,
        required: true,
        description: "ID of the appointment to delete.",
    }],
};

/// Removes a stored appointment by ID.
pub struct DeleteAppointment {
    db: Database,
}

impl DeleteAppointment {
    /// Create the tool over a database handle.
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl Tool for DeleteAppointment {
    fn declaration(&self) -> &'static ToolDeclaration {
        &DECLARATION
    }

    async fn execute(&self, args: ToolArgs) -> Result<Value, ToolError> {
        let id = args.get_i64("appointment_id")?;

        appointment::delete(self.db.pool(), id).await?;
        info!("Deleted appointment {}", id);

        Ok(json!({ "deleted": true, "appointment_id": id }))
    }
}
