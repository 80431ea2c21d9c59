//! Shared utilities for riskdash
//!
//! This crate provides common functionality used across the riskdash workspace:
//! logging setup and the application configuration that tells the dashboard
//! where its data lives.

pub mod config;
pub mod logging;

pub use config::{Config, ConfigError, GaugeVariant};
pub use logging::init_tracing;
