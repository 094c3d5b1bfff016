//! Upcoming-birthday planner.
//!
//! Given "today", finds the contacts whose next birthday is 1 to 6 days away
//! and groups them by the weekday they should be congratulated on. Birthdays
//! that land on a weekend are moved to Monday.

use crate::models::Record;
use chrono::{Datelike, Days, NaiveDate, Weekday};
use std::fmt;

/// Birthdays strictly closer than this many days are reported.
pub const WINDOW_DAYS: i64 = 7;

/// Full English name of a weekday.
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// The Monday on or after `today`.
pub fn upcoming_monday(today: NaiveDate) -> NaiveDate {
    let days_until_monday = (7 - today.weekday().num_days_from_monday()) % 7;
    today + Days::new(u64::from(days_until_monday))
}

/// Contact names grouped by congratulation day.
///
/// Days appear in the order they were first filled; names appear in the
/// order their records were scanned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeekSchedule {
    days: Vec<(Weekday, Vec<String>)>,
}

impl WeekSchedule {
    /// True when nobody has a birthday in the window.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Number of distinct days with at least one birthday.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Names bucketed under `day`, if any.
    pub fn names_on(&self, day: Weekday) -> Option<&[String]> {
        self.days
            .iter()
            .find(|(d, _)| *d == day)
            .map(|(_, names)| names.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (Weekday, &[String])> {
        self.days.iter().map(|(day, names)| (*day, names.as_slice()))
    }

    fn push(&mut self, day: Weekday, name: &str) {
        match self.days.iter_mut().find(|(d, _)| *d == day) {
            Some((_, names)) => names.push(name.to_string()),
            None => self.days.push((day, vec![name.to_string()])),
        }
    }
}

impl fmt::Display for WeekSchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (day, names)) in self.days.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}: {}", weekday_name(*day), names.join(", "))?;
        }
        Ok(())
    }
}

/// This year's date of the birthday, with the distance in days to its next
/// occurrence on or after `today`.
fn next_occurrence(record: &Record, today: NaiveDate) -> Option<(NaiveDate, i64)> {
    let birthday = record.birthday()?;
    let this_year = birthday.in_year(today.year())?;

    let next = if this_year < today {
        birthday.in_year(today.year() + 1)?
    } else {
        this_year
    };

    Some((this_year, (next - today).num_days()))
}

/// Build the congratulation schedule for the week following `today`.
///
/// A contact is included when their next birthday is more than 0 and fewer
/// than [`WINDOW_DAYS`] days away. The bucket follows the weekday of the
/// birthday in `today`'s year, even when the next occurrence falls in the
/// following year. Weekday birthdays are bucketed under that day; weekend
/// birthdays under the Monday on or after `today`.
pub fn birthdays_in_week<'a, I>(records: I, today: NaiveDate) -> WeekSchedule
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut schedule = WeekSchedule::default();

    for record in records {
        let Some((this_year, delta_days)) = next_occurrence(record, today) else {
            continue;
        };

        if !(1..WINDOW_DAYS).contains(&delta_days) {
            continue;
        }

        let day = match this_year.weekday() {
            Weekday::Sat | Weekday::Sun => upcoming_monday(today).weekday(),
            weekday => weekday,
        };

        tracing::trace!(
            name = %record.name(),
            birthday = %this_year,
            bucket = weekday_name(day),
            "Birthday scheduled"
        );
        schedule.push(day, record.name().as_str());
    }

    schedule
}
