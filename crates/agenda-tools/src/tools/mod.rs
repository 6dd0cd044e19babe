//! Appointment tool implementations.

mod check_occupied_slots;
mod delete_appointment;
mod list_appointments;
mod save_appointment;
mod update_appointment;

pub use check_occupied_slots::CheckOccupiedSlots;
pub use delete_appointment::DeleteAppointment;
pub use list_appointments::ListAppointments;
pub use save_appointment::SaveAppointment;
pub use update_appointment::UpdateAppointment;
