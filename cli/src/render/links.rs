use common::flat_record::FlatRecord;
use console::{Alignment, measure_text_width, pad_str};

/// Regulatory number per row, with its 510(k) lookup link where one was derived.
pub fn render_links(rows: &[FlatRecord]) -> String {
    let numbered: Vec<&FlatRecord> = rows.iter().filter(|r| !r.regulatory_number.is_empty()).collect();
    if numbered.is_empty() {
        return "no regulatory numbers in the current results\n".to_string();
    }
    let width = numbered.iter().map(|r| measure_text_width(&r.regulatory_number)).max().unwrap_or(0);
    let mut out = String::new();
    for row in numbered {
        let link = row.regulatory_link.as_deref().unwrap_or("(no link)");
        out.push_str(&format!("{}  {}\n", pad_str(&row.regulatory_number, width, Alignment::Left, None), link));
    }
    out
}
