//! Configuration loading and management for the HR dashboard service.
//!
//! Replaces hard-coded connection constants with a YAML file that is read
//! once at startup and injected into the application state.
//!
//! # Example
//!
//! ```no_run
//! use hr_dashboard::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/default.yaml").unwrap();
//! println!("Seed file: {:?}", loader.seed_path());
//! ```

mod loader;
mod types;

pub(crate) use loader::load_yaml;
pub use loader::ConfigLoader;
pub use types::{AppConfig, LoggingConfig, ServerConfig, StoreConfig};
