//! Week-range expressions: "1-11,13-14" or "1,3,5[单周]" -> explicit week numbers.

/// Bracketed display markers the schedule appends to week expressions.
/// The parity markers (单周/双周) are informational only and never filter the
/// parsed numbers; filtering would silently change occurrence sets.
const WEEK_MARKERS: [&str; 3] = ["[单周]", "[双周]", "[周]"];

fn leading_number(part: &str) -> Option<u32> {
    let end = part
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(part.len());
    part[..end].parse().ok()
}

/// Parse a compact week expression into a sorted, deduplicated list of week
/// numbers. Ranges are inclusive; malformed tokens are skipped rather than
/// failing the whole expression, so an unparseable input yields an empty list.
pub fn parse_weeks(text: &str) -> Vec<u32> {
    let mut stripped = text.trim().to_string();
    for marker in WEEK_MARKERS {
        stripped = stripped.replace(marker, "");
    }

    let mut weeks = Vec::new();
    for part in stripped.split(',') {
        let part = part.trim();
        match part.split_once('-') {
            Some((from, to)) => {
                if let (Ok(start), Some(end)) = (from.parse::<u32>(), leading_number(to)) {
                    weeks.extend(start..=end);
                }
            }
            None => {
                if let Some(week) = leading_number(part) {
                    weeks.push(week);
                }
            }
        }
    }
    weeks.sort_unstable();
    weeks.dedup();
    weeks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_ranges_and_singles() {
        assert_eq!(
            parse_weeks("1-11,13-14"),
            vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 13, 14]
        );
        assert_eq!(parse_weeks("3"), vec![3]);
    }

    #[test]
    fn discards_week_markers() {
        assert_eq!(parse_weeks("1,3,5[单周]"), vec![1, 3, 5]);
        assert_eq!(parse_weeks("2,4,6[双周]"), vec![2, 4, 6]);
        assert_eq!(parse_weeks("1-16[周]"), (1..=16).collect::<Vec<u32>>());
    }

    #[test]
    fn deduplicates_and_sorts() {
        assert_eq!(parse_weeks("5,1-3,2"), vec![1, 2, 3, 5]);
    }

    #[test]
    fn skips_malformed_tokens() {
        assert_eq!(parse_weeks("1,x,3"), vec![1, 3]);
        assert_eq!(parse_weeks("1a-3,5"), vec![5]);
        assert_eq!(parse_weeks("9-6"), Vec::<u32>::new());
    }

    #[test]
    fn unparseable_input_yields_empty_set() {
        assert_eq!(parse_weeks(""), Vec::<u32>::new());
        assert_eq!(parse_weeks("待定"), Vec::<u32>::new());
    }
}
