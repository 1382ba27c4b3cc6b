//! Human-readable digest of the parsed schedule, printed after generation.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Write as _;

use crate::timetable::Course;

const WEEKDAY_NAMES: [&str; 7] = ["周一", "周二", "周三", "周四", "周五", "周六", "周日"];

#[derive(Default)]
struct CourseStats {
    meetings: usize,
    weekdays: BTreeSet<u32>,
    classrooms: BTreeSet<String>,
    weeks: BTreeSet<u32>,
}

fn weekday_name(day: u32) -> &'static str {
    day.checked_sub(1)
        .and_then(|i| WEEKDAY_NAMES.get(i as usize))
        .copied()
        .unwrap_or("周?")
}

/// Render per-course totals: meeting count, weekdays, classrooms and week
/// span, grouped by (name, teacher) and listed in sorted order.
pub fn render_summary(courses: &[Course]) -> String {
    let mut stats: BTreeMap<(String, String), CourseStats> = BTreeMap::new();
    for course in courses {
        let entry = stats
            .entry((course.name.clone(), course.teacher.clone()))
            .or_default();
        for schedule in &course.schedules {
            entry.meetings += schedule.weeks.len();
            entry.weekdays.insert(schedule.weekday);
            entry.weeks.extend(schedule.weeks.iter().copied());
        }
        entry.classrooms.insert(course.classroom.clone());
    }

    let total_meetings: usize = stats.values().map(|s| s.meetings).sum();
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} courses, {} class meetings",
        stats.len(),
        total_meetings
    );
    for (i, ((name, teacher), s)) in stats.iter().enumerate() {
        let weekdays = s
            .weekdays
            .iter()
            .map(|&d| weekday_name(d))
            .collect::<Vec<_>>()
            .join("、");
        let classrooms = s.classrooms.iter().cloned().collect::<Vec<_>>().join("、");
        let span = match (s.weeks.first(), s.weeks.last()) {
            (Some(first), Some(last)) => format!("{first}-{last}周"),
            _ => "无".to_string(),
        };
        let _ = writeln!(out, "{:2}. {name}", i + 1);
        let _ = writeln!(out, "    teacher: {teacher}");
        let _ = writeln!(out, "    days: {weekdays}");
        let _ = writeln!(out, "    rooms: {classrooms}");
        let _ = writeln!(out, "    meetings: {} ({span})", s.meetings);
    }
    out
}
