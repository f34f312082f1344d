//! Seed data loading.

use std::path::Path;

use chrono::NaiveDate;
use tracing::{info, warn};

use crate::config::load_yaml;
use crate::error::EngineResult;
use crate::models::Employee;

/// Loads a YAML list of employees and recomputes each age as of `today`.
///
/// Birth dates that cannot be parsed load as absent; those records are
/// logged and kept.
pub fn load_seed<P: AsRef<Path>>(path: P, today: NaiveDate) -> EngineResult<Vec<Employee>> {
    let path = path.as_ref();
    let mut employees: Vec<Employee> = load_yaml(path)?;

    for employee in &mut employees {
        if employee.birth_date.is_none() {
            warn!(employee_id = %employee.id, "Seed record has no usable birth date");
        }
        employee.refresh_age(today);
    }

    info!(
        path = %path.display(),
        count = employees.len(),
        "Loaded seed employees"
    );
    Ok(employees)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;

    #[test]
    fn test_load_bundled_seed() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        let employees = load_seed("./config/employees.yaml", today).unwrap();

        assert!(!employees.is_empty());
        let first = &employees[0];
        assert_eq!(first.id, "EMP-001");
        assert!(first.birth_date.is_some());
        assert!(first.age > 0);
    }

    #[test]
    fn test_missing_seed_is_config_not_found() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        let result = load_seed("./config/does-not-exist.yaml", today);
        assert!(matches!(result, Err(EngineError::ConfigNotFound { .. })));
    }
}
