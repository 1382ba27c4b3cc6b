//! End-to-end pipeline: grid of cell strings -> merged courses -> dated
//! occurrences -> serialized calendar.

use chrono::{Duration, NaiveDate};

use sdust_ical::ics::{expand_occurrences, writer::write_calendar, TermTimes};
use sdust_ical::timetable::grid::collect_records;
use sdust_ical::timetable::merge::merge_courses;

fn row(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|s| s.to_string()).collect()
}

fn monday() -> NaiveDate {
    // 2025-09-01 is a Monday, the anchor of week 1.
    NaiveDate::from_ymd_opt(2025, 9, 1).unwrap()
}

#[test]
fn single_cell_becomes_three_dated_events() {
    let grid = vec![
        row(&["课表", ""]),
        row(&["", "星期一"]),
        row(&["第一大节", "高等数学\n张老师(教授)\n1-3\nJ7-106室"]),
    ];

    let courses = merge_courses(collect_records(&grid));
    assert_eq!(courses.len(), 1);
    let course = &courses[0];
    assert_eq!(course.name, "高等数学");
    assert_eq!(course.teacher, "张老师");
    assert_eq!(course.classroom, "J7-106室");
    assert_eq!(course.location, "山东科技大学J7");
    assert_eq!(course.schedules.len(), 1);
    assert_eq!(course.schedules[0].weekday, 1);
    assert_eq!(course.schedules[0].weeks, vec![1, 2, 3]);
    assert_eq!(course.schedules[0].indexes, [1, 2]);

    let occurrences = expand_occurrences(&courses, monday(), &TermTimes::default());
    assert_eq!(occurrences.len(), 3);
    for (i, occurrence) in occurrences.iter().enumerate() {
        assert_eq!(
            occurrence.start.date(),
            monday() + Duration::days(7 * i as i64)
        );
        assert_eq!(occurrence.title, "高等数学 - J7-106室");
        assert_eq!(occurrence.location.as_deref(), Some("山东科技大学J7"));
        assert_eq!(occurrence.end - occurrence.start, Duration::minutes(110));
    }

    let ics = write_calendar(&occurrences);
    assert_eq!(ics.matches("BEGIN:VEVENT").count(), 3);
    assert!(ics.contains("DTSTART:20250901T080000"));
    assert!(ics.contains("DTSTART:20250908T080000"));
    assert!(ics.contains("DTSTART:20250915T080000"));
}

#[test]
fn split_sessions_merge_into_one_course() {
    let cell = "高等数学\n张老师(教授)\n1-8\nJ7-106室";
    let grid = vec![
        row(&["课表", "", ""]),
        row(&["", "星期一", "星期三"]),
        row(&["第一大节", cell, ""]),
        row(&["第三大节", "", cell]),
    ];

    let courses = merge_courses(collect_records(&grid));
    assert_eq!(courses.len(), 1, "same key must never yield two courses");
    assert_eq!(courses[0].schedules.len(), 2);
    assert_eq!(courses[0].schedules[0].weekday, 1);
    assert_eq!(courses[0].schedules[0].indexes, [1, 2]);
    assert_eq!(courses[0].schedules[1].weekday, 3);
    assert_eq!(courses[0].schedules[1].indexes, [5, 6]);

    // One calendar series per schedule entry, not per course duplicate.
    let occurrences = expand_occurrences(&courses, monday(), &TermTimes::default());
    assert_eq!(occurrences.len(), 16);
}

#[test]
fn wednesday_weeks_land_on_exact_offsets() {
    let grid = vec![
        row(&["课表", ""]),
        row(&["", "星期三"]),
        row(&["第一大节", "概率论\n王老师\n1-3\nS1-305室"]),
    ];
    let courses = merge_courses(collect_records(&grid));
    let occurrences = expand_occurrences(&courses, monday(), &TermTimes::default());

    let dates: Vec<NaiveDate> = occurrences.iter().map(|o| o.start.date()).collect();
    assert_eq!(
        dates,
        vec![
            monday() + Duration::days(2),
            monday() + Duration::days(9),
            monday() + Duration::days(16),
        ]
    );
    assert!(occurrences
        .iter()
        .all(|o| o.start.time() == occurrences[0].start.time()
            && o.end.time() == occurrences[0].end.time()));
}

#[test]
fn truncated_cell_degrades_title_and_location() {
    let grid = vec![
        row(&["课表", ""]),
        row(&["", "星期二"]),
        row(&["第二大节", "概率论\n王老师\n1-2"]),
    ];
    let courses = merge_courses(collect_records(&grid));
    assert_eq!(courses.len(), 1);
    assert_eq!(courses[0].classroom, "未知教室");
    assert_eq!(courses[0].location, "");

    let occurrences = expand_occurrences(&courses, monday(), &TermTimes::default());
    assert_eq!(occurrences[0].title, "概率论");
    assert_eq!(occurrences[0].location, None);

    let ics = write_calendar(&occurrences);
    assert!(!ics.contains("LOCATION"));
    assert!(ics.contains("SUMMARY:概率论\r\n"));
}

#[test]
fn pe_course_keeps_dates_but_no_location() {
    let grid = vec![
        row(&["课表", ""]),
        row(&["", "星期五"]),
        row(&["第四大节", "大学体育（篮球）\n刘老师(讲师)\n1-16\n体育场"]),
    ];
    let courses = merge_courses(collect_records(&grid));
    assert_eq!(courses[0].name, "大学体育");
    assert_eq!(courses[0].location, "");

    let occurrences = expand_occurrences(&courses, monday(), &TermTimes::default());
    assert_eq!(occurrences.len(), 16);
    assert!(occurrences.iter().all(|o| o.location.is_none()));
}

#[test]
fn empty_grid_produces_no_courses() {
    assert!(merge_courses(collect_records(&[])).is_empty());

    let headers_only = vec![row(&["课表", ""]), row(&["", "星期一"])];
    assert!(merge_courses(collect_records(&headers_only)).is_empty());
}
