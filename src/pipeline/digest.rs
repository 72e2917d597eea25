//! Digest rendering.
//!
//! Renders newly observed sequences as a markdown table and derives the
//! post title from the most recent Sunday.

use chrono::{Datelike, NaiveDate};

use crate::models::Sequence;

/// Marker appended to a data preview when terms were cut off.
const ELLIPSIS: &str = "...";

/// Paragraph prepended to the very first digest.
const FIRST_RUN_INTRO: &str = "Hello! This bot tracks the On-Line Encyclopedia \
of Integer Sequences and posts a weekly digest of every sequence added since \
the previous week, with a link and the first few terms of each.";

/// Render the digest body for one run's new sequences.
///
/// Rows are sorted by id. Literal pipes in a name are escaped so they
/// cannot break the table. On the first-ever run a fixed introduction
/// precedes the table.
pub fn render(records: &[Sequence], first_run: bool, preview_terms: usize) -> String {
    let mut sorted: Vec<&Sequence> = records.iter().collect();
    sorted.sort_by_key(|r| r.number);

    let mut lines = Vec::with_capacity(sorted.len() + 4);
    if first_run {
        lines.push(FIRST_RUN_INTRO.to_string());
        lines.push(String::new());
    }

    lines.push("|OEIS number|Description|Sequence|".to_string());
    lines.push("|-|-|-|".to_string());

    for record in sorted {
        lines.push(format!(
            "|[{}]({})|{}|{}|",
            record.a_number(),
            record.url(),
            escape_pipes(&record.name),
            preview(&record.data, preview_terms),
        ));
    }

    lines.join("\n")
}

/// Post title for the most recent completed week: the Sunday at or
/// before `today`, formatted `%m/%d`.
pub fn week_title(today: NaiveDate) -> String {
    let back = today.weekday().num_days_from_sunday() as u64;
    let sunday = today - chrono::Days::new(back);
    format!("New OEIS sequences - week of {}", sunday.format("%m/%d"))
}

/// Escape literal pipes so a name cannot break out of its table cell.
fn escape_pipes(name: &str) -> String {
    name.replace('|', "\\|")
}

/// First `limit` terms of a comma-separated data string, with an
/// ellipsis marker iff further terms were dropped.
fn preview(data: &str, limit: usize) -> String {
    let terms: Vec<&str> = data
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect();

    let shown = &terms[..terms.len().min(limit)];
    let mut out = shown.join(", ");
    if terms.len() > limit {
        out.push_str(ELLIPSIS);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_sequence(number: u64, name: &str, data: &str) -> Sequence {
        Sequence {
            number,
            name: name.to_string(),
            data: data.to_string(),
        }
    }

    #[test]
    fn test_preview_truncates_long_data() {
        let data = "1,2,3,4,5,6,7,8,9,10,11,12";
        assert_eq!(preview(data, 5), "1, 2, 3, 4, 5...");
    }

    #[test]
    fn test_preview_exact_limit_has_no_marker() {
        assert_eq!(preview("1,2,3,4,5", 5), "1, 2, 3, 4, 5");
    }

    #[test]
    fn test_preview_short_data() {
        assert_eq!(preview("1,2", 5), "1, 2");
        assert_eq!(preview("", 5), "");
    }

    #[test]
    fn test_render_table_shape() {
        let records = vec![make_sequence(360002, "Second", "1,1,2,3,5,8")];
        let digest = render(&records, false, 5);

        let lines: Vec<&str> = digest.lines().collect();
        assert_eq!(lines[0], "|OEIS number|Description|Sequence|");
        assert_eq!(lines[1], "|-|-|-|");
        assert_eq!(
            lines[2],
            "|[A360002](https://oeis.org/A360002)|Second|1, 1, 2, 3, 5...|"
        );
    }

    #[test]
    fn test_render_escapes_pipes_in_name() {
        let records = vec![make_sequence(7, "a(n) = |n|", "0,1,2")];
        let digest = render(&records, false, 5);
        assert!(digest.contains("a(n) = \\|n\\|"));
    }

    #[test]
    fn test_render_sorts_by_id() {
        let records = vec![
            make_sequence(30, "Third", "3"),
            make_sequence(10, "First", "1"),
            make_sequence(20, "Second", "2"),
        ];
        let digest = render(&records, false, 5);

        let first = digest.find("A10").unwrap();
        let second = digest.find("A20").unwrap();
        let third = digest.find("A30").unwrap();
        assert!(first < second && second < third);
    }

    #[test]
    fn test_render_first_run_intro() {
        let records = vec![make_sequence(1, "One", "1")];

        let with_intro = render(&records, true, 5);
        assert!(with_intro.starts_with(FIRST_RUN_INTRO));

        let without = render(&records, false, 5);
        assert!(without.starts_with("|OEIS number|"));
    }

    #[test]
    fn test_week_title_on_a_sunday() {
        // 2024-01-07 was a Sunday.
        let today = NaiveDate::from_ymd_opt(2024, 1, 7).unwrap();
        assert_eq!(week_title(today), "New OEIS sequences - week of 01/07");
    }

    #[test]
    fn test_week_title_mid_week_rolls_back() {
        // Wednesday 2024-01-10 belongs to the week of Sunday 01/07.
        let today = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        assert_eq!(week_title(today), "New OEIS sequences - week of 01/07");

        // Saturday is the last day still in that week.
        let saturday = NaiveDate::from_ymd_opt(2024, 1, 13).unwrap();
        assert_eq!(week_title(saturday), "New OEIS sequences - week of 01/07");
    }
}
