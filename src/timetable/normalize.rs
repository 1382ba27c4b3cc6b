//! Cleanup of free-form course and classroom names from the printed sheet.

/// Remove one bracket style (with contents) everywhere in `text`. An opening
/// bracket without a closing partner is left alone.
fn strip_groups(text: &str, open: char, close: char) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    loop {
        let Some(start) = rest.find(open) else {
            out.push_str(rest);
            return out;
        };
        let after = start + open.len_utf8();
        let Some(end) = rest[after..].find(close) else {
            out.push_str(rest);
            return out;
        };
        out.push_str(&rest[..start]);
        rest = &rest[after + end + close.len_utf8()..];
    }
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Strip every bracketed qualifier from a course name, both full-width and
/// ASCII styles: 电路（2） -> 电路, 大学英语（A）（2-2） -> 大学英语.
/// Idempotent; empty input stays empty.
pub fn normalize_course_name(name: &str) -> String {
    let stripped = strip_groups(name.trim(), '（', '）');
    let stripped = strip_groups(&stripped, '(', ')');
    collapse_whitespace(&stripped)
}

/// Fix the known malformed building prefix: Js1-305室 -> S1-305室.
/// Anything else passes through unchanged apart from trimming.
pub fn normalize_classroom_name(room: &str) -> String {
    let trimmed = room.trim();
    if let Some(rest) = trimmed.strip_prefix("Js") {
        if rest.starts_with(|c: char| c.is_ascii_digit()) {
            return format!("S{rest}");
        }
    }
    trimmed.to_string()
}
