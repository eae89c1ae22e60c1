//! Human-readable report rendering.

use std::fmt::Write;

use textstat_types::AnalysisReport;

const RULE_WIDTH: usize = 60;

/// Renders `report` for display under the title `name`.
///
/// Failed reports show only the error message. `top_n` is the configured
/// ranking size and only affects the section heading.
pub fn render_report(report: &AnalysisReport, name: &str, top_n: usize) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "📊 TEXT ANALYSIS REPORT: {name}");
    let _ = writeln!(out, "{rule}");

    if let Some(error) = report.error() {
        let _ = writeln!(out, "❌ Error: {error}");
        let _ = writeln!(out, "{rule}");
        return out;
    }

    let _ = writeln!(out, "📈 Basic Statistics:");
    let _ = writeln!(out, "   • Number of lines: {}", fmt_count(report.line_count as u64));
    let _ = writeln!(out, "   • Number of words: {}", fmt_count(report.word_count as u64));
    let _ = writeln!(
        out,
        "   • Number of characters: {}",
        fmt_count(report.character_count as u64)
    );

    if report.top_words.is_empty() {
        let _ = writeln!(out, "\nℹ️  No words found for frequency analysis");
    } else {
        let _ = writeln!(out, "\n🏆 Top {top_n} Most Frequent Words:");
        for (i, word) in report.top_words.iter().enumerate() {
            let _ = writeln!(out, "   {}. {}", i + 1, word);
        }
    }

    let _ = writeln!(out, "{rule}");
    out
}

/// Formats `n` with `,` thousands separators.
pub fn fmt_count(n: u64) -> String {
    let s = n.to_string();
    let mut out = String::with_capacity(s.len() + s.len() / 3);

    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out.chars().rev().collect()
}
