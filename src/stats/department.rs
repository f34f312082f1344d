//! Department grouping.
//!
//! Department names arrive either as a bare code ("Engineering") or with a
//! parenthesised acronym ("(CYDD) Child and Youth Development Division").
//! [`department_key`] is the one place that turns either form into the key
//! used for grouping, filtering, and display.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::{DepartmentCount, Employee};

use super::tally;

/// Key used when a department is blank.
pub const UNKNOWN_DEPARTMENT: &str = "Unknown";

static ACRONYM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(([^)]+)\)").expect("acronym pattern is valid"));

/// Extracts the grouping key from a department string.
///
/// The key is the text inside the first non-blank parenthesised group, else
/// the first whitespace-delimited token, else [`UNKNOWN_DEPARTMENT`].
/// Keys are stable under re-keying only when they contain no whitespace:
/// `"(A B) Office"` keys to `"A B"`, which in turn keys to `"A"`.
///
/// # Example
///
/// ```
/// use hr_dashboard::stats::department_key;
///
/// assert_eq!(department_key("(CYDD) Child and Youth Development Division"), "CYDD");
/// assert_eq!(department_key("Engineering"), "Engineering");
/// assert_eq!(department_key("Finance and Admin"), "Finance");
/// assert_eq!(department_key(""), "Unknown");
/// ```
pub fn department_key(department: &str) -> String {
    let acronym = ACRONYM
        .captures_iter(department)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .find(|interior| !interior.is_empty());

    acronym
        .or_else(|| department.split_whitespace().next())
        .unwrap_or(UNKNOWN_DEPARTMENT)
        .to_string()
}

/// Counts employees per department key, largest group first.
///
/// Groups with equal counts keep the order in which they were first seen.
///
/// # Example
///
/// ```
/// use hr_dashboard::models::Employee;
/// use hr_dashboard::stats::department_distribution;
///
/// let employees = vec![
///     Employee::new("EMP-001", "Ana", "Engineering"),
///     Employee::new("EMP-002", "Ben", "(HRD) Human Resources Division"),
///     Employee::new("EMP-003", "Cy", "(HRD) Human Resources Division"),
/// ];
/// let counts = department_distribution(&employees);
/// assert_eq!(counts[0].name, "HRD");
/// assert_eq!(counts[0].count, 2);
/// ```
pub fn department_distribution(employees: &[Employee]) -> Vec<DepartmentCount> {
    let mut counts: Vec<DepartmentCount> = tally(employees.iter().map(Employee::department_code))
        .into_iter()
        .map(|(name, count)| DepartmentCount { name, count })
        .collect();

    // sort_by is stable, so ties stay in first-seen order
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee(id: &str, department: &str) -> Employee {
        Employee::new(id, format!("Name {}", id), department)
    }

    #[test]
    fn test_key_from_parenthesised_acronym() {
        assert_eq!(
            department_key("(CYDD) Child and Youth Development Division"),
            "CYDD"
        );
    }

    #[test]
    fn test_key_acronym_not_at_start() {
        assert_eq!(department_key("Planning Office (PDO)"), "PDO");
    }

    #[test]
    fn test_key_uses_first_acronym() {
        assert_eq!(department_key("(ABC) and (XYZ)"), "ABC");
    }

    #[test]
    fn test_key_skips_empty_parentheses() {
        assert_eq!(department_key("() Records (REC)"), "REC");
        assert_eq!(department_key("( ) Records"), "Records");
    }

    #[test]
    fn test_key_without_parentheses_uses_first_token() {
        assert_eq!(department_key("Engineering"), "Engineering");
        assert_eq!(department_key("Finance and Admin"), "Finance");
        assert_eq!(department_key("  Legal  "), "Legal");
    }

    #[test]
    fn test_key_for_blank_department_is_unknown() {
        assert_eq!(department_key(""), UNKNOWN_DEPARTMENT);
        assert_eq!(department_key("   "), UNKNOWN_DEPARTMENT);
    }

    #[test]
    fn test_key_is_idempotent_for_codes() {
        for dept in ["(CYDD) Child and Youth", "Engineering", "", "Finance and Admin"] {
            let once = department_key(dept);
            assert_eq!(department_key(&once), once);
        }
    }

    #[test]
    fn test_key_with_inner_whitespace_is_not_stable() {
        let once = department_key("(A B) Office");
        assert_eq!(once, "A B");
        assert_eq!(department_key(&once), "A");
    }

    #[test]
    fn test_distribution_sorted_by_count_descending() {
        let employees = vec![
            employee("1", "Engineering"),
            employee("2", "(HRD) Human Resources"),
            employee("3", "(HRD) Human Resources"),
            employee("4", "(HRD) Human Resources"),
            employee("5", "Engineering"),
            employee("6", "Legal"),
        ];

        let counts = department_distribution(&employees);
        assert_eq!(
            counts,
            vec![
                DepartmentCount { name: "HRD".to_string(), count: 3 },
                DepartmentCount { name: "Engineering".to_string(), count: 2 },
                DepartmentCount { name: "Legal".to_string(), count: 1 },
            ]
        );
    }

    #[test]
    fn test_distribution_ties_keep_first_seen_order() {
        let employees = vec![
            employee("1", "Legal"),
            employee("2", "Engineering"),
            employee("3", "Engineering"),
            employee("4", "Legal"),
            employee("5", "Admin"),
        ];

        let names: Vec<String> = department_distribution(&employees)
            .into_iter()
            .map(|d| d.name)
            .collect();
        assert_eq!(names, vec!["Legal", "Engineering", "Admin"]);
    }

    #[test]
    fn test_distribution_merges_long_and_short_forms() {
        let employees = vec![
            employee("1", "(CYDD) Child and Youth Development Division"),
            employee("2", "CYDD"),
        ];

        let counts = department_distribution(&employees);
        assert_eq!(counts.len(), 1);
        assert_eq!(counts[0].count, 2);
    }

    #[test]
    fn test_distribution_empty_input() {
        assert!(department_distribution(&[]).is_empty());
    }
}
