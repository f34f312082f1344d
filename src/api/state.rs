//! Application state for the HR dashboard API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::clock::{Clock, SystemClock};
use crate::stats::StatsEngine;
use crate::store::EmployeeRepository;

/// Shared application state.
///
/// Holds the employee store, the statistics engine, and the clock that
/// supplies the reference date for ages and birthdays.
#[derive(Clone)]
pub struct AppState {
    repository: Arc<dyn EmployeeRepository>,
    engine: StatsEngine,
    clock: Arc<dyn Clock>,
}

impl AppState {
    /// Creates a new application state using the system clock.
    pub fn new(repository: Arc<dyn EmployeeRepository>, engine: StatsEngine) -> Self {
        Self {
            repository,
            engine,
            clock: Arc::new(SystemClock),
        }
    }

    /// Replaces the clock, typically with a fixed date in tests.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Returns the employee store.
    pub fn repository(&self) -> &dyn EmployeeRepository {
        self.repository.as_ref()
    }

    /// Returns the statistics engine.
    pub fn engine(&self) -> &StatsEngine {
        &self.engine
    }

    /// Returns today's date according to the configured clock.
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }
}
