//! Appointment tools, registry and dispatcher for the citas chatbot.
//!
//! This crate provides everything between "the model asked for a tool" and
//! "a normalized result envelope is back in the transcript":
//!
//! - [`Tool`] - trait for named operations over the appointment store
//! - [`ToolDeclaration`] - typed parameter schema, rendered to the wire
//!   format advertised to the model and reused for argument coercion
//! - [`coerce`] - schema-driven conversion of stringly-typed arguments
//! - [`ToolRegistry`] - the fixed name-to-tool mapping
//! - [`ToolDispatcher`] - per-call decode/resolve/coerce/execute pipeline
//!
//! # Built-in Tools
//!
//! - [`ListAppointments`] - upcoming appointments in an optional range.
//! - [`CheckOccupiedSlots`] - occupied slots inside an inclusive interval.
//! - [`SaveAppointment`] - persist a confirmed appointment.
//! - [`UpdateAppointment`] - partial update by ID.
//! - [`DeleteAppointment`] - delete by ID.
//!
//! # Example
//!
//! ```rust,ignore
//! use agenda_tools::{appointment_registry, ToolDispatcher};
//! use std::sync::Arc;
//!
//! let registry = Arc::new(appointment_registry(db));
//! let dispatcher = ToolDispatcher::new(registry);
//! let result = dispatcher.dispatch(&call).await; // never panics the round
//! ```

pub mod coerce;
mod dispatcher;
mod error;
mod registry;
mod schema;
mod tool;
pub mod tools;

pub use dispatcher::ToolDispatcher;
pub use error::ToolError;
pub use registry::ToolRegistry;
pub use schema::{ParamKind, ParamSpec, ToolDeclaration};
pub use tool::{Tool, ToolArgs};
pub use tools::{
    CheckOccupiedSlots, DeleteAppointment, ListAppointments, SaveAppointment, UpdateAppointment,
};

// Re-export async_trait for convenience
pub use async_trait::async_trait;

use database::Database;

/// Create a registry with the full set of appointment tools registered.
pub fn appointment_registry(db: Database) -> ToolRegistry {
    let mut registry = ToolRegistry::new();

    registry.register(ListAppointments::new(db.clone()));
    registry.register(CheckOccupiedSlots::new(db.clone()));
    registry.register(SaveAppointment::new(db.clone()));
    registry.register(UpdateAppointment::new(db.clone()));
    registry.register(DeleteAppointment::new(db));

    registry
}
