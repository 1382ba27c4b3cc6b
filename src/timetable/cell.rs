//! Decode one spreadsheet cell into course records.
//!
//! A populated cell is a flat run of logical lines repeating
//! name / teacher / weeks / classroom. Cells are frequently truncated, so the
//! decoder advances an explicit field state machine and falls back to
//! sentinels for missing tail fields instead of indexing into the line list.

use crate::timetable::normalize::{normalize_classroom_name, normalize_course_name};
use crate::timetable::weeks::parse_weeks;
use crate::timetable::{UNKNOWN_CLASSROOM, UNKNOWN_TEACHER};

/// One course parsed out of a cell, before weekday/slot tagging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellCourse {
    pub name: String,
    pub teacher: String,
    pub weeks: Vec<u32>,
    pub classroom: String,
}

/// The field the decoder expects next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Name,
    Teacher,
    Weeks,
    Classroom,
}

#[derive(Debug, Default)]
struct PartialRecord {
    name: Option<String>,
    teacher: Option<String>,
    weeks: Option<Vec<u32>>,
    classroom: Option<String>,
}

impl PartialRecord {
    /// Finalize with sentinels for missing tail fields. A record without a
    /// usable name or with an empty week set is dropped.
    fn finish(self) -> Option<CellCourse> {
        let name = normalize_course_name(self.name.as_deref()?);
        if name.is_empty() {
            return None;
        }
        let weeks = self.weeks.unwrap_or_default();
        if weeks.is_empty() {
            return None;
        }
        Some(CellCourse {
            name,
            teacher: self
                .teacher
                .unwrap_or_else(|| UNKNOWN_TEACHER.to_string()),
            weeks,
            classroom: self
                .classroom
                .map(|room| normalize_classroom_name(&room))
                .unwrap_or_else(|| UNKNOWN_CLASSROOM.to_string()),
        })
    }
}

/// "张老师(教授)" -> "张老师"; a line without a (qualifier) tail is verbatim.
fn teacher_name(line: &str) -> &str {
    match line.find('(') {
        Some(open) if open > 0 && line[open..].contains(')') => &line[..open],
        _ => line,
    }
}

/// Split a cell's text into course records. Blank cells yield nothing.
pub fn decode_cell(cell_text: &str) -> Vec<CellCourse> {
    let lines = cell_text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty());

    let mut courses = Vec::new();
    let mut state = Field::Name;
    let mut partial = PartialRecord::default();

    for line in lines {
        match state {
            Field::Name => {
                partial.name = Some(line.to_string());
                state = Field::Teacher;
            }
            Field::Teacher => {
                partial.teacher = Some(teacher_name(line).to_string());
                state = Field::Weeks;
            }
            Field::Weeks => {
                partial.weeks = Some(parse_weeks(line));
                state = Field::Classroom;
            }
            Field::Classroom => {
                partial.classroom = Some(line.to_string());
                courses.extend(std::mem::take(&mut partial).finish());
                state = Field::Name;
            }
        }
    }
    if state != Field::Name {
        courses.extend(partial.finish());
    }
    courses
}
