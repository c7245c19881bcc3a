//! Configuration module for Carelog.

mod app_config;
mod helpers;
mod notifications;
mod server;

pub use app_config::AppConfig;
pub use helpers::{deserialize_duration_from_seconds, serialize_duration_to_seconds};
pub use notifications::NotificationsConfig;
pub use server::ServerConfig;
