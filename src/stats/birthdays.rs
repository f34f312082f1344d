//! Upcoming birthday projection.
//!
//! Birthdays are projected onto the calendar relative to a reference date
//! supplied by the caller. The reference date is never read from the system
//! clock here.

use chrono::{Datelike, NaiveDate, NaiveDateTime};

use crate::models::{Employee, UpcomingBirthday};

/// Default look-ahead window in days (inclusive).
pub const DEFAULT_BIRTHDAY_WINDOW_DAYS: i64 = 60;

/// Default number of upcoming birthdays returned.
pub const DEFAULT_BIRTHDAY_LIMIT: usize = 5;

/// Returns the birthday's occurrence in `year`.
///
/// A 29 February birthday falls on 1 March in non-leap years. Returns `None`
/// only when `year` is outside chrono's supported range.
fn occurrence_in(birth_date: NaiveDate, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, birth_date.month(), birth_date.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
}

/// Returns the next occurrence of a birthday on or after `today`.
///
/// # Example
///
/// ```
/// use hr_dashboard::stats::next_birthday;
/// use chrono::NaiveDate;
///
/// let dob = NaiveDate::from_ymd_opt(1990, 3, 10).unwrap();
/// let today = NaiveDate::from_ymd_opt(2026, 3, 11).unwrap();
/// assert_eq!(next_birthday(dob, today), NaiveDate::from_ymd_opt(2027, 3, 10));
/// ```
pub fn next_birthday(birth_date: NaiveDate, today: NaiveDate) -> Option<NaiveDate> {
    let this_year = occurrence_in(birth_date, today.year())?;
    if this_year < today {
        occurrence_in(birth_date, today.year() + 1)
    } else {
        Some(this_year)
    }
}

/// Returns whole days from `today` until the next birthday; zero when the
/// birthday is today.
pub fn days_until_birthday(birth_date: NaiveDate, today: NaiveDate) -> Option<i64> {
    next_birthday(birth_date, today).map(|next| (next - today).num_days())
}

/// Projects the birthdays falling within `window_days` of `today`.
///
/// Employees without a birth date are skipped. Results are ordered by
/// `days_until` ascending (ties keep input order) and truncated to `limit`.
/// The reported age is the stored age plus one. The stored age counts
/// completed years, so on the birthday itself it has already gone up and the
/// reported age is one past the age being turned.
///
/// # Example
///
/// ```
/// use hr_dashboard::models::Employee;
/// use hr_dashboard::stats::upcoming_birthdays;
/// use chrono::NaiveDate;
///
/// let mut ana = Employee::new("EMP-001", "Ana", "HR");
/// ana.birth_date = NaiveDate::from_ymd_opt(1991, 10, 16);
/// ana.age = 34;
///
/// let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
/// let upcoming = upcoming_birthdays(&[ana], today, 60, 5);
/// assert_eq!(upcoming[0].days_until, 0);
/// assert_eq!(upcoming[0].age, 35);
/// assert_eq!(upcoming[0].birth_month, "Oct");
/// ```
pub fn upcoming_birthdays(
    employees: &[Employee],
    today: NaiveDate,
    window_days: i64,
    limit: usize,
) -> Vec<UpcomingBirthday> {
    let mut upcoming: Vec<UpcomingBirthday> = employees
        .iter()
        .filter_map(|employee| {
            let birth_date = employee.birth_date?;
            let days_until = days_until_birthday(birth_date, today)?;
            (0..=window_days)
                .contains(&days_until)
                .then(|| UpcomingBirthday {
                    id: employee.id.clone(),
                    name: employee.name.clone(),
                    department: employee.department_code(),
                    birth_date,
                    age: employee.age.saturating_add(1),
                    birth_day: birth_date.day(),
                    birth_month: birth_date.format("%b").to_string(),
                    days_until,
                })
        })
        .collect();

    upcoming.sort_by_key(|b| b.days_until);
    upcoming.truncate(limit);
    upcoming
}

/// Same as [`upcoming_birthdays`] for a reference instant.
///
/// Birthdays start at midnight, so the fractional day left over from the
/// time of day always rounds up to the calendar-day difference; only the
/// date part of `now` matters.
pub fn upcoming_birthdays_at(
    employees: &[Employee],
    now: NaiveDateTime,
    window_days: i64,
    limit: usize,
) -> Vec<UpcomingBirthday> {
    upcoming_birthdays(employees, now.date(), window_days, limit)
}
