//! Walk the printed timetable grid: one weekday header row, then one row per
//! big period with decodable cells under each weekday column.

use crate::timetable::cell::decode_cell;
use crate::timetable::CourseRecord;

/// Row carrying the weekday labels; everything above it is title banner.
const WEEKDAY_HEADER_ROW: usize = 1;
/// First row that can hold a big-period label plus cells.
const FIRST_SLOT_ROW: usize = 2;

/// Map a big-period row label to the pair of period indexes it covers.
pub fn time_slot_indexes(label: &str) -> Option<[u32; 2]> {
    match label {
        "第一大节" => Some([1, 2]),
        "第二大节" => Some([3, 4]),
        "第三大节" => Some([5, 6]),
        "第四大节" => Some([7, 8]),
        "第五大节" => Some([9, 10]),
        _ => None,
    }
}

/// Map a weekday header label to 1 (Monday) .. 7 (Sunday).
pub fn weekday_number(label: &str) -> Option<u32> {
    match label {
        "星期一" => Some(1),
        "星期二" => Some(2),
        "星期三" => Some(3),
        "星期四" => Some(4),
        "星期五" => Some(5),
        "星期六" => Some(6),
        "星期日" => Some(7),
        _ => None,
    }
}

/// Decode every populated cell under a recognized (slot row, weekday column)
/// into course records tagged with weekday and period indexes.
///
/// Unrecognized slot labels skip their row, unrecognized weekday headers skip
/// their column. Rows are visited top to bottom, columns left to right, so
/// records come out in the sheet's reading order.
pub fn collect_records(rows: &[Vec<String>]) -> Vec<CourseRecord> {
    let mut weekday_columns = Vec::new();
    if let Some(header) = rows.get(WEEKDAY_HEADER_ROW) {
        for (col, label) in header.iter().enumerate().skip(1) {
            let label = label.trim();
            if !label.contains("星期") {
                continue;
            }
            if let Some(weekday) = weekday_number(label) {
                weekday_columns.push((col, weekday));
            }
        }
    }

    let mut records = Vec::new();
    for row in rows.iter().skip(FIRST_SLOT_ROW) {
        let label = match row.first() {
            Some(label) => label.trim(),
            None => continue,
        };
        if !label.contains('第') {
            continue;
        }
        let indexes = match time_slot_indexes(label) {
            Some(indexes) => indexes,
            None => continue,
        };

        for &(col, weekday) in &weekday_columns {
            let text = match row.get(col) {
                Some(text) if !text.trim().is_empty() => text,
                _ => continue,
            };
            for course in decode_cell(text) {
                records.push(CourseRecord {
                    name: course.name,
                    teacher: course.teacher,
                    classroom: course.classroom,
                    weekday,
                    weeks: course.weeks,
                    indexes,
                });
            }
        }
    }
    records
}
