//! Configuration loading and layering.
//!
//! Handles `.userdir.toml` loading, environment variable resolution,
//! and CLI flag merging with proper priority ordering.

pub mod loader;

pub use loader::{ApiConfig, Config, ConfigError, DashboardConfig, LogConfig};
