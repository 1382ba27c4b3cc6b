//! Collapse records that share (name, teacher, classroom) into one course
//! with several schedule entries, so split sessions don't become duplicate
//! calendar series.

use std::collections::HashMap;

use crate::timetable::location::classroom_to_location;
use crate::timetable::{Course, CourseRecord, ScheduleEntry};

/// Merge decoded records into courses. Every record contributes one schedule
/// entry; first-seen key order is kept so output follows the sheet's reading
/// order. The location is resolved once per course.
pub fn merge_courses(records: Vec<CourseRecord>) -> Vec<Course> {
    let mut courses: Vec<Course> = Vec::new();
    let mut index: HashMap<(String, String, String), usize> = HashMap::new();

    for record in records {
        let key = (
            record.name.clone(),
            record.teacher.clone(),
            record.classroom.clone(),
        );
        let entry = ScheduleEntry {
            weekday: record.weekday,
            weeks: record.weeks,
            indexes: record.indexes,
        };
        match index.get(&key) {
            Some(&slot) => courses[slot].schedules.push(entry),
            None => {
                index.insert(key, courses.len());
                courses.push(Course {
                    location: classroom_to_location(&record.classroom, &record.name),
                    name: record.name,
                    teacher: record.teacher,
                    classroom: record.classroom,
                    schedules: vec![entry],
                });
            }
        }
    }
    courses
}
