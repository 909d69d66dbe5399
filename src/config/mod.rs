//! Configuration module for bookfees
//!
//! - config file location (flag, env var, XDG)
//! - report settings persistence

pub mod paths;
pub mod settings;

pub use paths::ConfigPaths;
pub use settings::Settings;
