use common::aggregate_count::AggregateCount;
use console::{Alignment, measure_text_width, pad_str};

const BAR: &str = "█";
const BLANK_LABEL: &str = "(blank)";
const MAX_LABEL_WIDTH: usize = 32;

/// Horizontal Pareto chart: one bar per bucket, longest first, with cumulative share.
pub fn render_pareto(counts: &AggregateCount, bar_width: usize) -> String {
    if counts.is_empty() {
        return format!("no reports to chart by {}\n", counts.category);
    }
    let points = counts.pareto();
    let max_count = points.iter().map(|p| p.count).max().unwrap_or(1).max(1);
    let label_width = points
        .iter()
        .map(|p| measure_text_width(label_of(&p.label)))
        .max()
        .unwrap_or(0)
        .min(MAX_LABEL_WIDTH);
    let count_width = max_count.to_string().len();

    let mut out = format!("{} (n={})\n", counts.category, counts.total());
    for point in points {
        let bar_len = ((point.count as usize * bar_width) / max_count as usize).max(1);
        out.push_str(&format!(
            "{}  {}{}  {:>count_width$}  {:>5.1}%\n",
            pad_str(label_of(&point.label), label_width, Alignment::Left, Some("…")),
            BAR.repeat(bar_len),
            " ".repeat(bar_width.saturating_sub(bar_len)),
            point.count,
            point.cumulative_percent,
        ));
    }
    out
}

fn label_of(label: &str) -> &str {
    if label.is_empty() { BLANK_LABEL } else { label }
}
