//! Term configuration and occurrence synthesis: (weekday, weeks, periods)
//! patterns anchored to the Monday of week 1 become concrete dated events.

pub mod writer;

use std::fs;
use std::path::Path;

use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::timetable::Course;

/// Periods in a class day; the slot table addresses all of them.
pub const PERIODS_PER_DAY: usize = 10;

/// Local wall-clock start of one period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodStart {
    pub hour: u32,
    pub minute: u32,
}

/// Per-period start times plus the per-period duration. The two periods of a
/// big slot share one start time; an event spans period count x duration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermTimes {
    pub period_minutes: u32,
    pub period_starts: Vec<PeriodStart>,
}

impl Default for TermTimes {
    fn default() -> Self {
        let table = [
            (8, 0),
            (8, 0),
            (10, 10),
            (10, 10),
            (14, 0),
            (14, 0),
            (16, 10),
            (16, 10),
            (19, 0),
            (19, 0),
        ];
        TermTimes {
            period_minutes: 55,
            period_starts: table
                .iter()
                .map(|&(hour, minute)| PeriodStart { hour, minute })
                .collect(),
        }
    }
}

impl TermTimes {
    /// Load a YAML override file and validate it.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Box<dyn std::error::Error>> {
        let raw = fs::read_to_string(path)?;
        let times: TermTimes = serde_yaml::from_str(&raw)?;
        times.validate()?;
        Ok(times)
    }

    /// Reject tables the synthesis step could not address.
    pub fn validate(&self) -> Result<(), String> {
        if self.period_minutes == 0 {
            return Err("period_minutes must be positive".to_string());
        }
        if self.period_starts.len() != PERIODS_PER_DAY {
            return Err(format!(
                "period_starts needs {PERIODS_PER_DAY} entries, got {}",
                self.period_starts.len()
            ));
        }
        for (i, start) in self.period_starts.iter().enumerate() {
            if start.hour > 23 || start.minute > 59 {
                return Err(format!(
                    "period {} start {:02}:{:02} is not a valid time",
                    i + 1,
                    start.hour,
                    start.minute
                ));
            }
        }
        Ok(())
    }
}

/// One concrete calendar event derived from a schedule entry and a week.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventOccurrence {
    pub title: String,
    /// None means the event carries no LOCATION property at all.
    pub location: Option<String>,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

/// Expand every (course, schedule entry, week) into a dated occurrence.
/// `start_date` is the Monday of week 1 and the sole chronological anchor:
/// no holiday inference, no timezone, week numbers trusted as given.
pub fn expand_occurrences(
    courses: &[Course],
    start_date: NaiveDate,
    times: &TermTimes,
) -> Vec<EventOccurrence> {
    let mut occurrences = Vec::new();
    for course in courses {
        let title = course.title();
        let location = if course.location.is_empty() {
            None
        } else {
            Some(course.location.clone())
        };
        for entry in &course.schedules {
            let period_start = match entry.indexes[0]
                .checked_sub(1)
                .and_then(|i| times.period_starts.get(i as usize))
            {
                Some(period_start) => *period_start,
                None => continue,
            };
            let period_count = entry.indexes[1].saturating_sub(entry.indexes[0]) + 1;
            let length =
                Duration::minutes(i64::from(period_count) * i64::from(times.period_minutes));

            for &week in &entry.weeks {
                if week == 0 || entry.weekday == 0 {
                    continue;
                }
                let offset =
                    Duration::days(i64::from(week - 1) * 7 + i64::from(entry.weekday - 1));
                let start = start_date
                    .checked_add_signed(offset)
                    .and_then(|date| date.and_hms_opt(period_start.hour, period_start.minute, 0));
                let start = match start {
                    Some(start) => start,
                    None => continue,
                };
                occurrences.push(EventOccurrence {
                    title: title.clone(),
                    location: location.clone(),
                    start,
                    end: start + length,
                });
            }
        }
    }
    occurrences
}
