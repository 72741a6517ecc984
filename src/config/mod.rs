//! Configuration module for the finance tracker
//!
//! This module provides configuration management including:
//! - Base directory resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::TrackerPaths;
pub use settings::Settings;
