pub mod auth;
pub mod config;
pub mod error;
pub mod export;
pub mod forms;
pub mod models;
pub mod notifications;
pub mod registry;
pub mod seed;
pub mod treatments;
pub mod ui;
pub mod validation;

pub use error::{AppError, Result};
