//! Human-readable rendering of an [`AnalysisSummary`].

use std::fmt::Write;

use crate::core::models::{AnalysisSummary, RankedEntry};

const RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";
const BAR_WIDTH: u64 = 30;

/// Renders a summary as a plain-text report.
///
/// ```
/// use chatlens::core::Aggregator;
/// use chatlens::parser::LogParser;
/// use chatlens::report::render_text;
///
/// # fn main() -> chatlens::Result<()> {
/// let source = LogParser::new().parse_str("07/01/2024, 21:15 - Alice: see you tomorrow")?;
/// let text = render_text(&Aggregator::default().analyze(&[source]));
/// assert!(text.contains("Messages:  1"));
/// assert!(text.contains("Busiest day:    Sunday"));
/// # Ok(())
/// # }
/// ```
pub fn render_text(summary: &AnalysisSummary) -> String {
    let mut out = String::new();
    write_report(&mut out, summary).expect("writing to a String cannot fail");
    out
}

fn write_report(out: &mut String, summary: &AnalysisSummary) -> std::fmt::Result {
    writeln!(out, "📊 Chat summary")?;
    writeln!(out, "{RULE}")?;
    writeln!(out, "   Messages:  {}", summary.total_messages)?;
    writeln!(out, "   Users:     {}", summary.total_users)?;
    match summary.date_range {
        Some(range) => writeln!(
            out,
            "   Period:    {} → {}",
            range.start.format("%Y-%m-%d %H:%M"),
            range.end.format("%Y-%m-%d %H:%M")
        )?,
        None => writeln!(out, "   Period:    -")?,
    }

    write_table(out, "👤 Top users", &summary.top_users)?;
    write_table(out, "💬 Top words", &summary.top_words)?;
    write_table(out, "😀 Top emojis", &summary.top_emojis)?;

    let time = &summary.time_analysis;
    writeln!(out)?;
    writeln!(out, "🕒 Activity")?;
    writeln!(out, "   Busiest hour:   {:02}:00", time.most_active_hour)?;
    writeln!(out, "   Busiest day:    {}", time.most_active_day_name())?;
    writeln!(out, "   Busiest month:  {}", time.most_active_month_name())?;

    let max = time.hour_counts.counts().iter().copied().max().unwrap_or(0);
    if max > 0 {
        writeln!(out)?;
        for (hour, &count) in time.hour_counts.counts().iter().enumerate() {
            let width = (count * BAR_WIDTH).div_ceil(max) as usize;
            writeln!(out, "   {hour:02} {:<30} {count}", "█".repeat(width))?;
        }
    }
    Ok(())
}

fn write_table(out: &mut String, title: &str, entries: &[RankedEntry]) -> std::fmt::Result {
    writeln!(out)?;
    writeln!(out, "{title}")?;
    if entries.is_empty() {
        writeln!(out, "   (none)")?;
    }
    for (rank, entry) in entries.iter().enumerate() {
        writeln!(out, "   {:>2}. {} ({})", rank + 1, entry.value, entry.count)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Aggregator;
    use crate::parser::LogParser;

    #[test]
    fn test_empty_summary() {
        let text = render_text(&AnalysisSummary::default());
        assert!(text.contains("Messages:  0"));
        assert!(text.contains("Period:    -"));
        assert!(text.contains("(none)"));
        assert!(text.contains("Busiest day:    Sunday"));
        assert!(text.contains("Busiest month:  January"));
    }

    #[test]
    fn test_ranked_tables() {
        let source = LogParser::new()
            .parse_str(
                "01/03/2024, 08:00 - Bob: pizza tonight? 🍕\n\
                 01/03/2024, 08:30 - Alice: pizza yes 🍕\n\
                 01/03/2024, 09:00 - Bob: great",
            )
            .unwrap();
        let text = render_text(&Aggregator::default().analyze(&[source]));

        assert!(text.contains("    1. Bob (2)"));
        assert!(text.contains("    2. Alice (1)"));
        assert!(text.contains("    1. pizza (2)"));
        assert!(text.contains("    1. 🍕 (2)"));
        assert!(text.contains("Busiest hour:   08:00"));
        assert!(text.contains("Busiest month:  March"));
        assert!(text.contains("Period:    2024-03-01 08:00 → 2024-03-01 09:00"));
    }
}
