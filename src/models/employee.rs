//! Employee model and related types.
//!
//! This module defines the Employee struct and EmploymentStatus enum
//! for representing staff records held by the employee store.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};

use crate::stats::department_key;

/// Highest performance rating an employee can hold.
pub const MAX_PERFORMANCE_RATING: f64 = 5.0;

/// Represents the employment arrangement of a staff member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmploymentStatus {
    /// Permanent (plantilla) position.
    Permanent,
    /// Job order engagement.
    #[serde(rename = "Job Order")]
    JobOrder,
    /// Co-terminous appointment.
    #[serde(rename = "Co-Term")]
    CoTerm,
}

impl EmploymentStatus {
    /// All statuses, in display order.
    pub const ALL: [EmploymentStatus; 3] = [
        EmploymentStatus::Permanent,
        EmploymentStatus::JobOrder,
        EmploymentStatus::CoTerm,
    ];

    /// Returns the label used on the wire and in the dashboard.
    pub fn as_str(&self) -> &'static str {
        match self {
            EmploymentStatus::Permanent => "Permanent",
            EmploymentStatus::JobOrder => "Job Order",
            EmploymentStatus::CoTerm => "Co-Term",
        }
    }
}

impl fmt::Display for EmploymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EmploymentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EmploymentStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown employment status: {}", s))
    }
}

/// Represents an employee record.
///
/// Field names follow the dashboard's camelCase JSON. `age` is derived from
/// `birth_date` by the store whenever a record is created or updated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Unique identifier for the employee (e.g. "EMP-001").
    pub id: String,
    /// Full name.
    pub name: String,
    /// Department, either a bare code or "(CODE) Full Name".
    #[serde(default)]
    pub department: String,
    /// Date of birth. Blank or unparseable values load as `None`.
    #[serde(default, deserialize_with = "lenient_date")]
    pub birth_date: Option<NaiveDate>,
    /// Age in completed years, as last computed by the store.
    #[serde(default)]
    pub age: u32,
    /// Performance rating on a 0.0 to 5.0 scale.
    #[serde(default)]
    pub performance_rating: Option<f64>,
    /// Training hours completed.
    #[serde(default)]
    pub training_hours: Option<u32>,
    /// Employment status.
    #[serde(default)]
    pub status: Option<EmploymentStatus>,
}

impl Employee {
    /// Creates an employee with only the identifying fields set.
    ///
    /// # Examples
    ///
    /// ```
    /// use hr_dashboard::models::Employee;
    ///
    /// let employee = Employee::new("EMP-001", "Ana Cruz", "(CYDD) Child and Youth Development Division");
    /// assert_eq!(employee.department_code(), "CYDD");
    /// assert!(employee.birth_date.is_none());
    /// ```
    pub fn new(id: impl Into<String>, name: impl Into<String>, department: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            department: department.into(),
            birth_date: None,
            age: 0,
            performance_rating: None,
            training_hours: None,
            status: None,
        }
    }

    /// Returns the grouping key for this employee's department.
    pub fn department_code(&self) -> String {
        department_key(&self.department)
    }

    /// Returns the performance rating if it is usable for ranking.
    ///
    /// Missing, zero, non-finite, and out-of-range ratings all count as absent.
    pub fn ranked_rating(&self) -> Option<f64> {
        self.performance_rating
            .filter(|r| r.is_finite() && *r > 0.0 && *r <= MAX_PERFORMANCE_RATING)
    }

    /// Returns the status label, or "Unknown" when no status is recorded.
    pub fn status_label(&self) -> &'static str {
        self.status.map_or("Unknown", |s| s.as_str())
    }

    /// Recomputes `age` from `birth_date` as of `today`.
    pub fn refresh_age(&mut self, today: NaiveDate) {
        self.age = self.birth_date.map_or(0, |dob| age_on(dob, today));
    }
}

/// Returns the number of completed years between `birth_date` and `today`.
///
/// Dates of birth after `today` yield zero.
///
/// # Examples
///
/// ```
/// use hr_dashboard::models::age_on;
/// use chrono::NaiveDate;
///
/// let dob = NaiveDate::from_ymd_opt(1990, 6, 15).unwrap();
/// assert_eq!(age_on(dob, NaiveDate::from_ymd_opt(2026, 6, 14).unwrap()), 35);
/// assert_eq!(age_on(dob, NaiveDate::from_ymd_opt(2026, 6, 15).unwrap()), 36);
/// ```
pub fn age_on(birth_date: NaiveDate, today: NaiveDate) -> u32 {
    let mut years = today.year() - birth_date.year();
    if (today.month(), today.day()) < (birth_date.month(), birth_date.day()) {
        years -= 1;
    }
    years.max(0) as u32
}

/// Parses a birth date leniently.
///
/// Accepts `null`, an empty string, `YYYY-MM-DD`, or a longer timestamp whose
/// first ten characters are `YYYY-MM-DD`. Anything else loads as `None`.
fn lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_birth_date))
}

/// Parses `YYYY-MM-DD`, tolerating a trailing time component.
pub(crate) fn parse_birth_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    let date_part = raw.get(..10).unwrap_or(raw);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}
