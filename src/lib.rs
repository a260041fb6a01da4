//! Telemetry ingestion gateway
//!
//! Accepts sensor readings (device id, temperature, humidity, source tag,
//! timestamp) over HTTP and serves back the single most-recent reading.
//! All state is in-memory and process-lifetime only.
//!
//! # Modules
//! - `config`: server configuration with environment overrides
//! - `state`: shared latest-reading slot
//! - `models`: request payloads, stored reading, response envelopes
//! - `error`: API error taxonomy
//! - `router`: route wiring and middleware layers
//! - `handlers`: request handlers

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod router;
pub mod state;

/// Service version reported by the root endpoint.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
