//! Timetable domain model: decoded course records and merged courses.

pub mod cell;
pub mod grid;
pub mod location;
pub mod merge;
pub mod normalize;
pub mod summary;
pub mod weeks;

use serde::Serialize;

/// Teacher sentinel used when a cell is truncated before the teacher line.
pub const UNKNOWN_TEACHER: &str = "未知教师";
/// Classroom sentinel used when a cell is truncated before the classroom line.
pub const UNKNOWN_CLASSROOM: &str = "未知教室";

/// One decoded (cell, weekday, slot) combination, before merging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseRecord {
    pub name: String,
    pub teacher: String,
    pub classroom: String,
    /// 1 = Monday .. 7 = Sunday.
    pub weekday: u32,
    /// Active week-of-term numbers, sorted ascending, deduped, never empty.
    pub weeks: Vec<u32>,
    /// First and last period index covered by the big slot (1-based, inclusive).
    pub indexes: [u32; 2],
}

/// One (weekday, weeks, periods) meeting pattern of a merged course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleEntry {
    pub weekday: u32,
    pub weeks: Vec<u32>,
    pub indexes: [u32; 2],
}

/// A merged course, unique per (name, teacher, classroom).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Course {
    pub name: String,
    pub teacher: String,
    pub classroom: String,
    /// Resolved map location; empty when the course has no fixed mappable room.
    pub location: String,
    pub schedules: Vec<ScheduleEntry>,
}

impl Course {
    /// Calendar event title. The unknown-classroom sentinel is noise, so the
    /// title degrades to the course name alone.
    pub fn title(&self) -> String {
        if self.classroom == UNKNOWN_CLASSROOM {
            self.name.clone()
        } else {
            format!("{} - {}", self.name, self.classroom)
        }
    }
}
