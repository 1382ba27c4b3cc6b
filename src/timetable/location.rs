//! Map a classroom label to a coarse campus location for the LOCATION field.
//!
//! Building-name inference is an ordered list of matcher functions, each
//! covering one campus naming convention; the first match wins and anything
//! unmatched falls back to the campus prefix plus the raw label.

use crate::timetable::normalize::normalize_classroom_name;
use crate::timetable::UNKNOWN_CLASSROOM;

/// Campus prefix for every resolved location.
pub const SCHOOL_NAME: &str = "山东科技大学";
/// Classroom sentinel for fully online classes.
pub const ONLINE_CLASSROOM: &str = "线上虚拟教室";
/// Course-name token marking PE classes, which have no fixed mappable room.
const PE_MARKER: &str = "体育";

/// Building extraction rules in priority order.
const BUILDING_RULES: &[fn(&str) -> Option<String>] = &[
    letter_block_room,
    special_zone,
    training_building,
    generic_building,
];

/// Resolve a classroom label to a map location. Total: every input produces a
/// (possibly empty) string, where empty means "set no location".
pub fn classroom_to_location(classroom: &str, course_name: &str) -> String {
    let classroom = classroom.trim();
    if classroom.is_empty() {
        return String::new();
    }
    let classroom = normalize_classroom_name(classroom);
    if classroom == UNKNOWN_CLASSROOM || classroom == ONLINE_CLASSROOM {
        return String::new();
    }
    if course_name.contains(PE_MARKER) {
        return String::new();
    }
    // Other online variants keep their label; no building to infer.
    if classroom.contains("线上") || classroom.contains("虚拟") {
        return classroom;
    }
    for rule in BUILDING_RULES {
        if let Some(location) = rule(&classroom) {
            return location;
        }
    }
    format!("{SCHOOL_NAME}{classroom}")
}

fn split_leading_digits(text: &str) -> (&str, &str) {
    let end = text
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(text.len());
    text.split_at(end)
}

/// J7-106室 / S1-305 -> campus + block code. The whole label must be
/// code-dash-room with an optional trailing 室.
fn letter_block_room(classroom: &str) -> Option<String> {
    let first = classroom.chars().next()?;
    if first != 'J' && first != 'S' {
        return None;
    }
    let (code, rest) = split_leading_digits(&classroom[first.len_utf8()..]);
    if code.is_empty() {
        return None;
    }
    let rest = rest.strip_prefix('-')?;
    let (room, rest) = split_leading_digits(rest);
    if room.is_empty() {
        return None;
    }
    let rest = rest.strip_suffix('室').unwrap_or(rest);
    if !rest.is_empty() {
        return None;
    }
    Some(format!("{SCHOOL_NAME}{first}{code}"))
}

/// JB区乒乓球馆 and friends: keep the full zone label behind the campus prefix.
fn special_zone(classroom: &str) -> Option<String> {
    let rest = classroom.strip_prefix("JB区")?;
    let first = rest.chars().next()?;
    if first == '-' || first == '室' {
        return None;
    }
    Some(format!("{SCHOOL_NAME}{classroom}"))
}

/// 实训6层-610室 -> the engineering training building; room detail dropped.
fn training_building(classroom: &str) -> Option<String> {
    let rest = classroom.strip_prefix("实训")?;
    let rest = rest.strip_suffix('室').unwrap_or(rest);
    let (floor, room) = rest.rsplit_once('-')?;
    if floor.is_empty() || room.is_empty() || !room.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    Some(format!("{SCHOOL_NAME}工程实训大楼"))
}

/// 品学楼B107 -> campus + 品学楼: the shortest dash-free prefix not ending in
/// a digit, followed by an optional wing letter and a room number.
fn generic_building(classroom: &str) -> Option<String> {
    for (idx, c) in classroom.char_indices() {
        if c == '-' {
            return None;
        }
        if c.is_ascii_digit() {
            continue;
        }
        let boundary = idx + c.len_utf8();
        let rest = &classroom[boundary..];
        let rest = rest
            .strip_prefix(|ch: char| ch.is_ascii_uppercase())
            .unwrap_or(rest);
        if rest.starts_with(|ch: char| ch.is_ascii_digit()) {
            return Some(format!("{SCHOOL_NAME}{}", &classroom[..boundary]));
        }
    }
    None
}
