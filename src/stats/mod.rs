//! Dashboard statistics engine.
//!
//! Every function in this module is pure: it takes an already-fetched slice
//! of employees (plus a reference date where calendars are involved) and
//! returns freshly built view models. Nothing here touches the store or the
//! system clock, and an empty slice always yields empty results.

mod birthdays;
mod department;
mod status;
mod top_performers;

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::models::{
    DashboardStats, DepartmentCount, Employee, StatusCount, TopPerformer, UpcomingBirthday,
};

pub use birthdays::{
    DEFAULT_BIRTHDAY_LIMIT, DEFAULT_BIRTHDAY_WINDOW_DAYS, days_until_birthday, next_birthday,
    upcoming_birthdays, upcoming_birthdays_at,
};
pub use department::{UNKNOWN_DEPARTMENT, department_distribution, department_key};
pub use status::status_distribution;
pub use top_performers::{DEFAULT_TOP_PERFORMER_LIMIT, top_performers};

/// Counts occurrences of each key, keeping first-seen order.
fn tally<I>(keys: I) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = String>,
{
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut counts: Vec<(String, usize)> = Vec::new();

    for key in keys {
        match index.get(&key) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(key.clone(), counts.len());
                counts.push((key, 1));
            }
        }
    }

    counts
}

/// Sums the recorded training hours; missing values count as zero.
pub fn total_training_hours(employees: &[Employee]) -> u64 {
    employees
        .iter()
        .filter_map(|e| e.training_hours)
        .map(u64::from)
        .sum()
}

/// Tunable limits for the statistics engine.
///
/// The defaults are the dashboard's standard figures: three top performers,
/// a sixty-day birthday window, and five birthdays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StatsSettings {
    /// Maximum entries in the top performers ranking.
    pub top_performer_limit: usize,
    /// Inclusive look-ahead window for birthdays, in days.
    pub birthday_window_days: i64,
    /// Maximum upcoming birthdays returned.
    pub birthday_limit: usize,
}

impl Default for StatsSettings {
    fn default() -> Self {
        Self {
            top_performer_limit: DEFAULT_TOP_PERFORMER_LIMIT,
            birthday_window_days: DEFAULT_BIRTHDAY_WINDOW_DAYS,
            birthday_limit: DEFAULT_BIRTHDAY_LIMIT,
        }
    }
}

/// Computes every dashboard projection with one set of limits.
///
/// # Example
///
/// ```
/// use hr_dashboard::models::Employee;
/// use hr_dashboard::stats::StatsEngine;
///
/// let engine = StatsEngine::default();
/// let stats = engine.dashboard(&[Employee::new("EMP-001", "Ana", "Engineering")]);
/// assert_eq!(stats.total_employees, 1);
/// assert_eq!(stats.departments[0].name, "Engineering");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct StatsEngine {
    settings: StatsSettings,
}

impl StatsEngine {
    /// Creates an engine with the given limits.
    pub fn new(settings: StatsSettings) -> Self {
        Self { settings }
    }

    /// Returns the limits in use.
    pub fn settings(&self) -> &StatsSettings {
        &self.settings
    }

    /// Department distribution, largest first.
    pub fn department_distribution(&self, employees: &[Employee]) -> Vec<DepartmentCount> {
        department_distribution(employees)
    }

    /// Status distribution in first-seen order.
    pub fn status_distribution(&self, employees: &[Employee]) -> Vec<StatusCount> {
        status_distribution(employees)
    }

    /// Top performers ranking.
    pub fn top_performers(&self, employees: &[Employee]) -> Vec<TopPerformer> {
        top_performers(employees, self.settings.top_performer_limit)
    }

    /// Upcoming birthdays relative to `today`.
    pub fn upcoming_birthdays(
        &self,
        employees: &[Employee],
        today: NaiveDate,
    ) -> Vec<UpcomingBirthday> {
        upcoming_birthdays(
            employees,
            today,
            self.settings.birthday_window_days,
            self.settings.birthday_limit,
        )
    }

    /// Headline totals plus the department, status, and performer views.
    pub fn dashboard(&self, employees: &[Employee]) -> DashboardStats {
        DashboardStats {
            total_employees: employees.len(),
            total_training_hours: total_training_hours(employees),
            departments: self.department_distribution(employees),
            statuses: self.status_distribution(employees),
            top_performers: self.top_performers(employees),
        }
    }
}
