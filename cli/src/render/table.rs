use console::{Alignment, measure_text_width, pad_str};
use common::flat_record::{FlatRecord, FlatRecordField};

/// Columns that fit a terminal; exports carry all of them.
pub const TABLE_COLUMNS: [FlatRecordField; 8] = [
    FlatRecordField::ReceivedDate,
    FlatRecordField::EventType,
    FlatRecordField::Manufacturer,
    FlatRecordField::BrandName,
    FlatRecordField::GenericName,
    FlatRecordField::ProductCode,
    FlatRecordField::DeviceClass,
    FlatRecordField::RegulatoryNumber,
];

const MAX_COLUMN_WIDTH: usize = 28;
const TRUNCATION_TAIL: &str = "…";

pub fn render_table(rows: &[&FlatRecord], columns: &[FlatRecordField], max_rows: usize) -> String {
    if rows.is_empty() {
        return "no matching reports\n".to_string();
    }
    let shown = &rows[..rows.len().min(max_rows)];

    let widths: Vec<usize> = columns
        .iter()
        .map(|&column| {
            shown
                .iter()
                .map(|row| measure_text_width(row.display_value(column)))
                .chain(std::iter::once(measure_text_width(column.header_name())))
                .max()
                .unwrap_or(0)
                .min(MAX_COLUMN_WIDTH)
        })
        .collect();

    let mut out = String::new();
    let header: Vec<&str> = columns.iter().map(|c| c.header_name()).collect();
    push_line(&mut out, &header, &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_line(&mut out, &rule.iter().map(String::as_str).collect::<Vec<_>>(), &widths);
    for row in shown {
        let cells: Vec<&str> = columns.iter().map(|&c| row.display_value(c)).collect();
        push_line(&mut out, &cells, &widths);
    }
    if shown.len() < rows.len() {
        out.push_str(&format!("... {} more rows (use --rows or export)\n", rows.len() - shown.len()));
    }
    out
}

fn push_line(out: &mut String, cells: &[&str], widths: &[usize]) {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| pad_str(cell, *width, Alignment::Left, Some(TRUNCATION_TAIL)).into_owned())
        .collect();
    out.push_str(padded.join("  ").trim_end());
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(manufacturer: &str, event_type: &str) -> FlatRecord {
        FlatRecord {
            manufacturer: Some(manufacturer.to_string()),
            event_type: Some(event_type.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn renders_header_rule_and_rows() {
        let a = row("ACME", "Injury");
        let b = row("GLOBEX", "Malfunction");
        let text = render_table(&[&a, &b], &[FlatRecordField::Manufacturer, FlatRecordField::EventType], 10);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Manufacturer  EventType");
        assert_eq!(lines[1], "------------  -----------");
        assert_eq!(lines[2], "ACME          Injury");
        assert_eq!(lines[3], "GLOBEX        Malfunction");
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn long_values_are_truncated() {
        let long = row(&"X".repeat(60), "Injury");
        let text = render_table(&[&long], &[FlatRecordField::Manufacturer], 10);
        let data_line = text.lines().nth(2).unwrap();
        assert_eq!(measure_text_width(data_line), MAX_COLUMN_WIDTH);
        assert!(data_line.ends_with(TRUNCATION_TAIL));
    }

    #[test]
    fn row_limit_notes_the_remainder() {
        let rows: Vec<FlatRecord> = (0..5).map(|i| row(&format!("M{i}"), "Injury")).collect();
        let refs: Vec<&FlatRecord> = rows.iter().collect();
        let text = render_table(&refs, &TABLE_COLUMNS, 2);
        assert!(text.contains("... 3 more rows"));
        assert_eq!(text.lines().count(), 5);
    }

    #[test]
    fn empty_rows_say_so() {
        assert_eq!(render_table(&[], &TABLE_COLUMNS, 10), "no matching reports\n");
    }
}
