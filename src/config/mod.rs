//! Configuration loading and management for the rota engine.
//!
//! This module loads the default shift windows, the day/night
//! classification cutoff and the early-finish amount from a YAML file.
//! The cycle zero date is not file configuration; it comes from the
//! data store.
//!
//! # Example
//!
//! ```no_run
//! use rota_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap().into_config();
//! println!("Night starts at {}", config.shift_times.night.start);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{ClassificationConfig, RotaConfig, ShiftWindow, ShiftWindows};
