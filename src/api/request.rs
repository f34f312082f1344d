//! Request types for the HR dashboard API.
//!
//! This module defines the JSON payload accepted by the create and update
//! endpoints and the query string accepted by the employee listing.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, EmploymentStatus, MAX_PERFORMANCE_RATING, parse_birth_date};

/// Body of `POST /employees` and `PUT /employees/:id`.
///
/// `age` is not accepted; it is recomputed from `birthDate`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRequest {
    /// Employee id. Optional on create (the next id is assigned); on update
    /// it must match the path when present.
    #[serde(default)]
    pub id: Option<String>,
    /// Full name.
    pub name: String,
    /// Department string.
    #[serde(default)]
    pub department: String,
    /// Date of birth as `YYYY-MM-DD`; blank means unknown.
    #[serde(default)]
    pub birth_date: Option<String>,
    /// Performance rating, 0.0 to 5.0.
    #[serde(default)]
    pub performance_rating: Option<f64>,
    /// Training hours completed.
    #[serde(default)]
    pub training_hours: Option<u32>,
    /// Employment status.
    #[serde(default)]
    pub status: Option<EmploymentStatus>,
}

impl EmployeeRequest {
    /// Validates the payload and builds the employee stored under `id`,
    /// with its age computed as of `today`.
    pub fn into_employee(self, id: String, today: NaiveDate) -> EngineResult<Employee> {
        if self.name.trim().is_empty() {
            return Err(EngineError::invalid_employee("name", "must not be blank"));
        }

        let birth_date = match self.birth_date.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => {
                let date = parse_birth_date(raw).ok_or_else(|| {
                    EngineError::invalid_employee(
                        "birthDate",
                        format!("'{}' is not a YYYY-MM-DD date", raw),
                    )
                })?;
                if date > today {
                    return Err(EngineError::invalid_employee(
                        "birthDate",
                        "cannot be in the future",
                    ));
                }
                Some(date)
            }
        };

        if let Some(rating) = self.performance_rating {
            if !rating.is_finite() || !(0.0..=MAX_PERFORMANCE_RATING).contains(&rating) {
                return Err(EngineError::invalid_employee(
                    "performanceRating",
                    format!("must be between 0.0 and {:.1}", MAX_PERFORMANCE_RATING),
                ));
            }
        }

        let mut employee = Employee {
            id,
            name: self.name.trim().to_string(),
            department: self.department.trim().to_string(),
            birth_date,
            age: 0,
            performance_rating: self.performance_rating,
            training_hours: self.training_hours,
            status: self.status,
        };
        employee.refresh_age(today);
        Ok(employee)
    }

    /// Returns the non-blank id carried in the body, if any.
    pub fn requested_id(&self) -> Option<&str> {
        self.id.as_deref().map(str::trim).filter(|id| !id.is_empty())
    }
}

/// Query string of `GET /employees`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmployeeQuery {
    /// Only employees in this department (full name or key).
    pub department: Option<String>,
    /// Only employees with this status label.
    pub status: Option<String>,
}

impl EmployeeQuery {
    /// Parses the status filter, if present.
    pub fn status_filter(&self) -> Result<Option<EmploymentStatus>, String> {
        self.status.as_deref().map(str::parse::<EmploymentStatus>).transpose()
    }
}
