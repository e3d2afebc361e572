pub mod config;
pub mod error;
pub mod notifications;
pub mod telemetry;
pub mod workflows;
