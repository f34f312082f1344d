//! Employment status distribution.

use crate::models::{Employee, StatusCount};

use super::tally;

/// Counts employees per status label in first-seen order.
///
/// Employees without a status are counted under "Unknown".
///
/// # Example
///
/// ```
/// use hr_dashboard::models::{Employee, EmploymentStatus};
/// use hr_dashboard::stats::status_distribution;
///
/// let mut ana = Employee::new("EMP-001", "Ana", "HR");
/// ana.status = Some(EmploymentStatus::JobOrder);
/// let ben = Employee::new("EMP-002", "Ben", "HR");
///
/// let counts = status_distribution(&[ana, ben]);
/// assert_eq!(counts[0].name, "Job Order");
/// assert_eq!(counts[1].name, "Unknown");
/// ```
pub fn status_distribution(employees: &[Employee]) -> Vec<StatusCount> {
    tally(employees.iter().map(|e| e.status_label().to_string()))
        .into_iter()
        .map(|(name, count)| StatusCount { name, count })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EmploymentStatus;

    fn employee(id: &str, status: Option<EmploymentStatus>) -> Employee {
        let mut employee = Employee::new(id, "Someone", "HR");
        employee.status = status;
        employee
    }

    #[test]
    fn test_first_seen_order_is_not_sorted() {
        let employees = vec![
            employee("1", Some(EmploymentStatus::CoTerm)),
            employee("2", Some(EmploymentStatus::Permanent)),
            employee("3", Some(EmploymentStatus::Permanent)),
            employee("4", Some(EmploymentStatus::Permanent)),
        ];

        let counts = status_distribution(&employees);
        assert_eq!(
            counts,
            vec![
                StatusCount { name: "Co-Term".to_string(), count: 1 },
                StatusCount { name: "Permanent".to_string(), count: 3 },
            ]
        );
    }

    #[test]
    fn test_missing_status_counts_as_unknown() {
        let employees = vec![
            employee("1", None),
            employee("2", Some(EmploymentStatus::JobOrder)),
            employee("3", None),
        ];

        let counts = status_distribution(&employees);
        assert_eq!(counts[0], StatusCount { name: "Unknown".to_string(), count: 2 });
        assert_eq!(counts[1], StatusCount { name: "Job Order".to_string(), count: 1 });
    }

    #[test]
    fn test_counts_sum_to_list_length() {
        let employees = vec![
            employee("1", Some(EmploymentStatus::CoTerm)),
            employee("2", None),
            employee("3", Some(EmploymentStatus::JobOrder)),
            employee("4", Some(EmploymentStatus::CoTerm)),
        ];

        let total: usize = status_distribution(&employees).iter().map(|s| s.count).sum();
        assert_eq!(total, employees.len());
    }

    #[test]
    fn test_empty_input() {
        assert!(status_distribution(&[]).is_empty());
    }
}
