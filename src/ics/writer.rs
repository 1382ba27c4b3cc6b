//! Serialize occurrences into an RFC 5545 calendar: floating local times,
//! escaped text values, 75-octet folded lines, CRLF endings.

use chrono::Utc;

use crate::ics::EventOccurrence;

const PRODID: &str = "-//sdust-ical//timetable//CN";
/// Maximum content-line length in octets, per RFC 5545 §3.1.
const FOLD_LIMIT: usize = 75;

/// Render the whole calendar. Each occurrence becomes an independent VEVENT;
/// the occurrence order is preserved.
pub fn write_calendar(occurrences: &[EventOccurrence]) -> String {
    let stamp = Utc::now().format("%Y%m%dT%H%M%SZ").to_string();
    let mut out = String::new();
    push_line(&mut out, "BEGIN:VCALENDAR");
    push_line(&mut out, "VERSION:2.0");
    push_line(&mut out, &format!("PRODID:{PRODID}"));
    push_line(&mut out, "CALSCALE:GREGORIAN");
    for (seq, event) in occurrences.iter().enumerate() {
        let start = event.start.format("%Y%m%dT%H%M%S");
        push_line(&mut out, "BEGIN:VEVENT");
        push_line(&mut out, &format!("UID:{seq}-{start}@sdust-ical"));
        push_line(&mut out, &format!("DTSTAMP:{stamp}"));
        push_line(&mut out, &format!("DTSTART:{start}"));
        push_line(
            &mut out,
            &format!("DTEND:{}", event.end.format("%Y%m%dT%H%M%S")),
        );
        push_line(&mut out, &format!("SUMMARY:{}", escape_text(&event.title)));
        if let Some(location) = &event.location {
            push_line(&mut out, &format!("LOCATION:{}", escape_text(location)));
        }
        push_line(&mut out, "END:VEVENT");
    }
    push_line(&mut out, "END:VCALENDAR");
    out
}

/// Backslash-escape the characters RFC 5545 reserves in TEXT values.
fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            ';' => escaped.push_str("\\;"),
            ',' => escaped.push_str("\\,"),
            '\n' => escaped.push_str("\\n"),
            '\r' => {}
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Append one content line, folding anything longer than 75 octets onto
/// space-prefixed continuation lines, and terminate with CRLF.
fn push_line(out: &mut String, line: &str) {
    let mut rest = line;
    let mut first = true;
    loop {
        let budget = if first { FOLD_LIMIT } else { FOLD_LIMIT - 1 };
        if !first {
            out.push(' ');
        }
        if rest.len() <= budget {
            out.push_str(rest);
            break;
        }
        let split = char_boundary_at_most(rest, budget);
        out.push_str(&rest[..split]);
        out.push_str("\r\n");
        rest = &rest[split..];
        first = false;
    }
    out.push_str("\r\n");
}

fn char_boundary_at_most(text: &str, max: usize) -> usize {
    let mut idx = max;
    while !text.is_char_boundary(idx) {
        idx -= 1;
    }
    idx
}
