//! List upcoming appointments.

use async_trait::async_trait;
use database::{appointment, Database};
use serde_json::Value;
use tracing::debug;

use crate::coerce::{now_canonical, to_canonical};
use crate::error::ToolError;
use crate::schema::{ParamKind, ParamSpec, ToolDeclaration};
use crate::tool::{Tool, ToolArgs};

/// Default maximum number of appointments returned.
const DEFAULT_LIMIT: i64 = 48;

static DECLARATION: ToolDeclaration = ToolDeclaration {
    name: "get_appointment_lists",
    description: "Get list of appointments for next days",
    params: &[
        ParamSpec {
            name: "start",
            kind: ParamKind::DateTime,
            required: false,
            description: "Start datetime (inclusive) in ISO 8601, \
                          e.g. 2025-12-07T14:00:00Z. Optional.",
        },
        ParamSpec {
            name: "end",
            kind: ParamKind::DateTime,
            required: false,
            description: "End datetime (inclusive) in ISO 8601. Optional.",
        },
        ParamSpec {
            name: "limit",
            kind: ParamKind::Integer,
            required: false,
            description: "Max number of appointments to return. Optional (default 48).",
        },
    ],
};

/// Lists appointments in a date range, from "now" when no range is given.
pub struct ListAppointments {
    db: Database,
}

impl ListAppointments {
    /// Create the tool over a database handle.
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl Tool for ListAppointments {
    fn declaration(&self) -> &'static ToolDeclaration {
        &DECLARATION
    }

    async fn execute(&self, args: ToolArgs) -> Result<Value, ToolError> {
        let start = args
            .get_datetime_opt("start")?
            .map(to_canonical)
            .unwrap_or_else(now_canonical);
        let end = args.get_datetime_opt("end")?.map(to_canonical);
        let limit = args.get_i64_opt("limit")?.unwrap_or(DEFAULT_LIMIT);

        debug!("get_appointment_lists(start={}, end={:?}, limit={})", start, end, limit);

        let rows =
            appointment::list_range(self.db.pool(), &start, end.as_deref(), Some(limit)).await?;

        Ok(serde_json::to_value(rows)?)
    }
}
