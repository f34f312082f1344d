//! Core data models for the HR dashboard.
//!
//! This module contains the employee record and the dashboard view models
//! derived from it.

mod dashboard;
mod employee;

pub use dashboard::{
    DashboardStats, DepartmentCount, StatusCount, TopPerformer, UpcomingBirthday,
    format_days_until,
};
pub use employee::{Employee, EmploymentStatus, MAX_PERFORMANCE_RATING, age_on};
pub(crate) use employee::parse_birth_date;
