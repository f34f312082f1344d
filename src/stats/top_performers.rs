//! Top performers ranking.

use crate::models::{Employee, TopPerformer};

/// Default number of employees in the ranking.
pub const DEFAULT_TOP_PERFORMER_LIMIT: usize = 3;

/// Ranks employees by performance rating, highest first.
///
/// Only employees with a usable rating (see [`Employee::ranked_rating`]) are
/// considered. Equal ratings keep their input order. At most `limit` entries
/// are returned.
///
/// # Example
///
/// ```
/// use hr_dashboard::models::Employee;
/// use hr_dashboard::stats::top_performers;
///
/// let mut ana = Employee::new("EMP-001", "Ana", "(HRD) Human Resources");
/// ana.performance_rating = Some(4.2);
/// let mut ben = Employee::new("EMP-002", "Ben", "Engineering");
/// ben.performance_rating = Some(4.9);
///
/// let ranking = top_performers(&[ana, ben], 3);
/// assert_eq!(ranking[0].id, "EMP-002");
/// assert_eq!(ranking[1].department, "HRD");
/// ```
pub fn top_performers(employees: &[Employee], limit: usize) -> Vec<TopPerformer> {
    let mut rated: Vec<(&Employee, f64)> = employees
        .iter()
        .filter_map(|e| e.ranked_rating().map(|rating| (e, rating)))
        .collect();

    rated.sort_by(|a, b| b.1.total_cmp(&a.1));

    rated
        .into_iter()
        .take(limit)
        .map(|(employee, rating)| TopPerformer {
            id: employee.id.clone(),
            name: employee.name.clone(),
            department: employee.department_code(),
            performance_rating: rating,
        })
        .collect()
}
