// src/models/mod.rs

//! Domain models for the notice checker.
//!
//! This module contains all data structures used throughout the application,
//! organized by their primary purpose.

mod config;
mod notice;
mod snapshot;

// Re-export all public types
pub use config::{Config, NotifyConfig, PortalConfig, StorageConfig};
pub use notice::{GroupedAnnouncements, TaggedLine};
pub use snapshot::{Snapshot, TIMESTAMP_FORMAT};
