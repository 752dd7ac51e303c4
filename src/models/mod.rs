// src/models/mod.rs

//! Domain models for the profile search pipeline.
//!
//! This module contains all data structures used throughout the application,
//! organized by their primary purpose.

mod config;
mod hit;
mod profile;
mod session;

// Re-export all public types
pub use config::{
    Config, DisplayConfig, ExportConfig, LoggingConfig, ProfileConfig, ProviderConfig,
};
pub use hit::{RawSearchHit, parse_response};
pub use profile::ProfileRecord;
pub use session::{SearchSession, SessionState};
