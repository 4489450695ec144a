//! GUI panels and application state.

pub mod app;
pub mod appointment_panel;
pub mod auth_screens;
pub mod components;
pub mod dashboard;
pub mod notification_panel;
pub mod patient_panel;
pub mod physio_panel;
pub mod reports_panel;
pub mod settings_panel;
pub mod staff_panel;
pub mod treatment_panel;

pub use app::ConsoleApp;
