//! Application state for the rota API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::fmt;
use std::sync::Arc;

use chrono::{Local, NaiveDateTime};

use crate::config::RotaConfig;
use crate::store::RotaStore;

/// Source of "now" for status derivation.
pub type Clock = Arc<dyn Fn() -> NaiveDateTime + Send + Sync>;

/// Shared application state.
///
/// Holds the rota configuration, the data store and the clock used to
/// derive shift statuses.
#[derive(Clone)]
pub struct AppState {
    config: Arc<RotaConfig>,
    store: Arc<dyn RotaStore>,
    clock: Clock,
}

impl AppState {
    /// Creates a state that reads the local wall clock.
    pub fn new(config: RotaConfig, store: Arc<dyn RotaStore>) -> Self {
        Self {
            config: Arc::new(config),
            store,
            clock: Arc::new(|| Local::now().naive_local()),
        }
    }

    /// Replaces the clock, typically with a fixed instant in tests.
    pub fn with_clock<F>(mut self, clock: F) -> Self
    where
        F: Fn() -> NaiveDateTime + Send + Sync + 'static,
    {
        self.clock = Arc::new(clock);
        self
    }

    /// Returns the rota configuration.
    pub fn config(&self) -> &RotaConfig {
        &self.config
    }

    /// Returns the data store.
    pub fn store(&self) -> &dyn RotaStore {
        self.store.as_ref()
    }

    /// Reads the clock.
    pub fn now(&self) -> NaiveDateTime {
        (self.clock)()
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryStore;
    use chrono::NaiveDate;

    #[test]
    fn test_app_state_is_clone() {
        // Required for axum state
        fn assert_clone<T: Clone + Send + Sync>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_with_clock_overrides_now() {
        let fixed = NaiveDate::from_ymd_opt(2025, 10, 27)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();
        let state = AppState::new(RotaConfig::default(), Arc::new(InMemoryStore::default()))
            .with_clock(move || fixed);

        assert_eq!(state.now(), fixed);
        assert_eq!(state.clone().now(), fixed);
    }
}
