//! Dashboard view models.
//!
//! These are the read-only projections produced by the statistics engine.
//! They are recomputed on every request and never stored.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Number of employees in one department group.
///
/// # Example
///
/// ```
/// use hr_dashboard::models::DepartmentCount;
///
/// let count = DepartmentCount { name: "CYDD".to_string(), count: 4 };
/// assert_eq!(serde_json::to_string(&count).unwrap(), r#"{"name":"CYDD","count":4}"#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentCount {
    /// The department grouping key.
    pub name: String,
    /// Number of employees in the group.
    pub count: usize,
}

/// Number of employees holding one employment status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCount {
    /// The status label, or "Unknown".
    pub name: String,
    /// Number of employees with this status.
    pub count: usize,
}

/// An entry in the top performers ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopPerformer {
    /// Employee id.
    pub id: String,
    /// Employee name.
    pub name: String,
    /// Department grouping key.
    pub department: String,
    /// The rating the employee was ranked by.
    pub performance_rating: f64,
}

/// An employee whose birthday falls inside the look-ahead window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpcomingBirthday {
    /// Employee id.
    pub id: String,
    /// Employee name.
    pub name: String,
    /// Department grouping key.
    pub department: String,
    /// Original date of birth.
    pub birth_date: NaiveDate,
    /// Stored age plus one. Equals the age being turned except on the
    /// birthday itself, when the stored age has already been refreshed.
    pub age: u32,
    /// Day of month of the birthday.
    pub birth_day: u32,
    /// Three-letter month abbreviation ("Jan" through "Dec").
    pub birth_month: String,
    /// Whole days from the reference date to the birthday; zero means today.
    pub days_until: i64,
}

impl UpcomingBirthday {
    /// Returns the countdown label shown next to the birthday.
    pub fn countdown_label(&self) -> String {
        format_days_until(self.days_until)
    }
}

/// Formats a birthday countdown: 0 is "Today!", 1 is "Tomorrow", else "{n}d".
///
/// # Example
///
/// ```
/// use hr_dashboard::models::format_days_until;
///
/// assert_eq!(format_days_until(0), "Today!");
/// assert_eq!(format_days_until(1), "Tomorrow");
/// assert_eq!(format_days_until(12), "12d");
/// ```
pub fn format_days_until(days: i64) -> String {
    match days {
        0 => "Today!".to_string(),
        1 => "Tomorrow".to_string(),
        n => format!("{}d", n),
    }
}

/// Headline statistics for the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    /// Number of employees on record.
    pub total_employees: usize,
    /// Sum of recorded training hours.
    pub total_training_hours: u64,
    /// Department distribution, largest first.
    pub departments: Vec<DepartmentCount>,
    /// Status distribution in first-seen order.
    pub statuses: Vec<StatusCount>,
    /// Highest-rated employees.
    pub top_performers: Vec<TopPerformer>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_performer_serializes_camel_case() {
        let performer = TopPerformer {
            id: "EMP-001".to_string(),
            name: "Ana".to_string(),
            department: "CYDD".to_string(),
            performance_rating: 4.8,
        };
        let json = serde_json::to_value(&performer).unwrap();
        assert_eq!(json["performanceRating"], 4.8);
        assert_eq!(json["department"], "CYDD");
    }

    #[test]
    fn test_upcoming_birthday_serializes_camel_case() {
        let birthday = UpcomingBirthday {
            id: "EMP-002".to_string(),
            name: "Ben".to_string(),
            department: "HR".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1990, 11, 3).unwrap(),
            age: 36,
            birth_day: 3,
            birth_month: "Nov".to_string(),
            days_until: 18,
        };
        let json = serde_json::to_value(&birthday).unwrap();
        assert_eq!(json["birthDate"], "1990-11-03");
        assert_eq!(json["birthDay"], 3);
        assert_eq!(json["birthMonth"], "Nov");
        assert_eq!(json["daysUntil"], 18);
        assert_eq!(birthday.countdown_label(), "18d");
    }

    #[test]
    fn test_format_days_until_negative_is_plain_number() {
        assert_eq!(format_days_until(-1), "-1d");
    }

    #[test]
    fn test_dashboard_stats_field_names() {
        let stats = DashboardStats {
            total_employees: 0,
            total_training_hours: 0,
            departments: vec![],
            statuses: vec![],
            top_performers: vec![],
        };
        let json = serde_json::to_value(&stats).unwrap();
        for key in [
            "totalEmployees",
            "totalTrainingHours",
            "departments",
            "statuses",
            "topPerformers",
        ] {
            assert!(json.get(key).is_some(), "missing key {}", key);
        }
    }
}
