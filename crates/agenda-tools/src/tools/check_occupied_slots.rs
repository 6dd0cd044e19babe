//! Check occupied time slots in a range.

use async_trait::async_trait;
use database::{appointment, Database};
use serde_json::Value;
use tracing::debug;

use crate::coerce::to_canonical;
use crate::error::ToolError;
use crate::schema::{ParamKind, ParamSpec, ToolDeclaration};
use crate::tool::{Tool, ToolArgs};

static DECLARATION: ToolDeclaration = ToolDeclaration {
    name: "check_occupied_slots",
    description: "Check for occupied time slots based on given criteria",
    params: &[
        ParamSpec {
            name: "start",
            kind: ParamKind::DateTime,
            required: true,
            description: "Start datetime (inclusive) in ISO 8601, \
                          e.g. 2025-12-07T14:00:00Z.",
        },
        ParamSpec {
            name: "end",
            kind: ParamKind::DateTime,
            required: true,
            description: "End datetime (inclusive) in ISO 8601.",
        },
    ],
};

/// Reports appointments whose date falls inside `[start, end]`.
///
/// Appointments store a point-in-time date with no duration, so "occupied"
/// means any stored date inside the inclusive interval.
pub struct CheckOccupiedSlots {
    db: Database,
}

impl CheckOccupiedSlots {
    /// Create the tool over a database handle.
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl Tool for CheckOccupiedSlots {
    fn declaration(&self) -> &'static ToolDeclaration {
        &DECLARATION
    }

    async fn execute(&self, args: ToolArgs) -> Result<Value, ToolError> {
        let start = args.get_datetime("start")?;
        let end = args.get_datetime("end")?;

        if end < start {
            return Err(ToolError::InvalidParameter {
                name: "end".to_string(),
                reason: "must not be earlier than 'start'".to_string(),
            });
        }

        let start = to_canonical(start);
        let end = to_canonical(end);
        debug!("check_occupied_slots(start={}, end={})", start, end);

        let rows = appointment::list_range(self.db.pool(), &start, Some(&end), None).await?;

        Ok(serde_json::to_value(rows)?)
    }
}
