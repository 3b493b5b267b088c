//! Plain-text summary of a report for the terminal.

use super::report::Report;
use crate::aggregator::{total_count, CategoryCount};

const KEY_WIDTH: usize = 42;

/// Render a text summary of the headline counts and top categories
///
/// **Public** - printed by `report --summary`
///
/// # Arguments
/// * `report` - Report to summarize
/// * `max_rows` - Rows shown per frequency table
pub fn render_text_summary(report: &Report, max_rows: usize) -> String {
    let tables = &report.tables;
    let mut lines = Vec::new();

    lines.push(format!("  Source:     {}", report.source));
    lines.push(format!("  Events:     {}", tables.event_count));
    lines.push(format!(
        "  Hostility:  {} took part, {} did not",
        tables.hostility.yes, tables.hostility.no
    ));
    if let Some(gender) = &tables.selected_gender {
        lines.push(format!("  Gender:     {} (of {:?})", gender, tables.gender_options));
    }
    lines.push(String::new());

    push_counts(&mut lines, "Citizenship", &tables.citizenship_counts, max_rows);
    push_counts(&mut lines, "Event Location Region", &tables.region_counts, max_rows);
    push_counts(&mut lines, "Weapons", &tables.weapon_counts, max_rows);
    push_counts(&mut lines, "Type of injury", &tables.injury_types, max_rows);

    if !tables.events_over_time.is_empty() {
        lines.push("  EVENTS OVER TIME".to_string());
        let peak = tables
            .events_over_time
            .iter()
            .map(|p| p.count)
            .max()
            .unwrap_or(1)
            .max(1);
        for point in &tables.events_over_time {
            let bar_len = point.count * 40 / peak;
            lines.push(format!(
                "  {:<16} {:>6} {}",
                point.label,
                point.count,
                "█".repeat(bar_len)
            ));
        }
        lines.push(String::new());
    }

    for warning in &tables.warnings {
        lines.push(format!("  ! {}: {}", warning.table, warning.reason));
    }

    lines.join("\n")
}

fn push_counts(lines: &mut Vec<String>, title: &str, counts: &[CategoryCount], max_rows: usize) {
    let total = total_count(counts).max(1);

    lines.push(format!("  ┏{}┳━━━━━━━━━━┳━━━━━━━━━┓", "━".repeat(KEY_WIDTH + 2)));
    lines.push(format!(
        "  ┃ {:<width$} ┃ {:^8} ┃ {:^7} ┃",
        title,
        "COUNT",
        "%",
        width = KEY_WIDTH
    ));
    lines.push(format!("  ┣{}╋━━━━━━━━━━╋━━━━━━━━━┫", "━".repeat(KEY_WIDTH + 2)));

    for entry in counts.iter().take(max_rows) {
        let percentage = entry.count as f64 / total as f64 * 100.0;
        lines.push(format!(
            "  ┃ {:<width$} ┃ {:>8} ┃ {:>6.1}% ┃",
            truncate(&entry.key, KEY_WIDTH),
            entry.count,
            percentage,
            width = KEY_WIDTH
        ));
    }

    lines.push(format!("  ┗{}┻━━━━━━━━━━┻━━━━━━━━━┛", "━".repeat(KEY_WIDTH + 2)));
    lines.push(String::new());
}

// Truncate by characters, not bytes
fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        value.to_string()
    } else {
        let kept: String = value.chars().take(width - 3).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::report::build_report;
    use crate::parser::schema::{EventRecord, EventTable, RawTable};
    use crate::pipeline::Pipeline;

    #[test]
    fn test_summary_contains_counts() {
        let table = EventTable::new(vec![
            EventRecord {
                citizenship: Some("Palestinian".to_string()),
                took_part_in_the_hostilities: Some("Yes".to_string()),
                ..Default::default()
            },
            EventRecord {
                citizenship: Some("Israeli".to_string()),
                took_part_in_the_hostilities: Some("No".to_string()),
                ..Default::default()
            },
        ]);
        let tables = Pipeline::new().recompute(&table, None).unwrap();
        let report = build_report("events.csv", &RawTable::default(), 5, tables);

        let summary = render_text_summary(&report, 10);

        assert!(summary.contains("Events:     2"));
        assert!(summary.contains("1 took part, 1 did not"));
        assert!(summary.contains("Palestinian"));
        assert!(summary.contains("50.0%"));
        assert!(summary.contains("! events_over_time"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdefghijkl", 8), "abcde...");
    }
}
