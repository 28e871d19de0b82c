use owo_colors::OwoColorize;
use std::io::IsTerminal;
use terminal_size::{terminal_size, Width};

use super::report::Report;
use crate::scoring::{Evaluation, ProviderCategory, ProviderScore, Recommendation, Tier};

/// Widest bar drawn next to a score, in characters.
const MAX_BAR_WIDTH: usize = 40;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Get terminal width, defaulting to None for pipes (no bars)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Format a score as a percentage with one decimal ("57.1%")
pub fn format_percent(score: f64) -> String {
    format!("{:.1}%", score)
}

/// Horizontal bar for a score, `width` characters at 100%.
/// Negative scores draw nothing.
pub fn score_bar(score: f64, width: usize) -> String {
    let filled = ((score.clamp(0.0, 100.0) / 100.0) * width as f64).round() as usize;
    "█".repeat(filled)
}

fn label_width() -> usize {
    ProviderCategory::ALL
        .iter()
        .map(|c| c.label().len())
        .max()
        .unwrap_or(0)
}

/// Format one metric line per category, in US, EU, China order.
/// A bar is appended when `bar_width` is given.
pub fn format_scores(scores: &ProviderScore, bar_width: Option<usize>, use_colors: bool) -> String {
    let label_width = label_width();
    scores
        .iter()
        .map(|(category, score)| {
            let label = format!("{:<width$}", category.label(), width = label_width);
            let percent = format!("{:>7}", format_percent(score));
            let bar = bar_width
                .map(|w| format!("  {}", score_bar(score, w)))
                .unwrap_or_default();
            if use_colors {
                format!("{}  {}{}", label.bold(), percent, bar.cyan())
            } else {
                format!("{}  {}{}", label, percent, bar)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn tier_marker(tier: Tier) -> &'static str {
    match tier {
        Tier::StronglyRecommended => "✓",
        Tier::ConsiderWithCaution => "!",
        Tier::NotRecommended => "✗",
    }
}

/// Format a single recommendation banner
/// Format: "✓ US Providers (100.0%) - Strongly Recommended"
pub fn format_recommendation(rec: &Recommendation, use_colors: bool) -> String {
    let line = format!(
        "{} {} ({}) - {}",
        tier_marker(rec.tier),
        rec.category.label(),
        format_percent(rec.score),
        rec.tier.label()
    );
    if !use_colors {
        return line;
    }
    match rec.tier {
        Tier::StronglyRecommended => line.green().to_string(),
        Tier::ConsiderWithCaution => line.yellow().to_string(),
        Tier::NotRecommended => line.red().to_string(),
    }
}

/// Format ranked recommendations, one banner per line
pub fn format_recommendations(recs: &[Recommendation], use_colors: bool) -> String {
    recs.iter()
        .map(|rec| format_recommendation(rec, use_colors))
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_delta(value: f64) -> String {
    format!("{:+.1}", value)
}

/// Format how each factor moved the totals (for --breakdown / verbose)
pub fn format_breakdown(evaluation: &Evaluation) -> String {
    let mut lines: Vec<String> = evaluation
        .factors
        .iter()
        .map(|factor| {
            format!(
                "  {:<17} US {:>7}  EU {:>7}  China {:>7}",
                factor.label,
                format_delta(factor.delta.us),
                format_delta(factor.delta.eu),
                format_delta(factor.delta.china),
            )
        })
        .collect();

    lines.push(format!(
        "  {:<17} US {:>7.1}  EU {:>7.1}  China {:>7.1}",
        "Total", evaluation.raw.us, evaluation.raw.eu, evaluation.raw.china
    ));
    if evaluation.normalized {
        lines.push(format!(
            "  Rescaled so the highest category is 100 (max was {:.1})",
            evaluation.raw.max()
        ));
    }
    lines.join("\n")
}

/// Format the full text report
pub fn format_report(report: &Report, show_breakdown: bool, use_colors: bool) -> String {
    let bar_width = get_terminal_width()
        .filter(|_| should_use_colors())
        .map(|w| w.saturating_sub(label_width() + 11).min(MAX_BAR_WIDTH))
        .filter(|w| *w > 0);

    let heading = |text: &str| {
        if use_colors {
            text.bold().underline().to_string()
        } else {
            text.to_string()
        }
    };

    let mut sections = vec![
        heading("Recommendations"),
        format_scores(&report.evaluation.scores, bar_width, use_colors),
    ];

    if show_breakdown {
        sections.push(String::new());
        sections.push(heading("Score Breakdown"));
        sections.push(format_breakdown(&report.evaluation));
    }

    sections.push(String::new());
    sections.push(heading("Detailed Analysis"));
    sections.push(format_recommendations(&report.recommendations, use_colors));

    if !report.considerations.is_empty() || !report.advisory_only.is_empty() {
        sections.push(String::new());
        sections.push(heading("Additional Considerations"));
        for note in &report.considerations {
            sections.push(format!("- {}", note.message));
        }
        if !report.advisory_only.is_empty() {
            sections.push(format!(
                "- Not scored, advice only: {}",
                report.advisory_only.join(", ")
            ));
        }
    }

    sections.join("\n")
}

/// Format recommendations as tab-separated values for scripting
/// Columns: category, score, tier (no headers, no colors)
pub fn format_tsv(recs: &[Recommendation]) -> String {
    recs.iter()
        .map(|rec| {
            format!(
                "{}\t{:.1}\t{}",
                rec.category.id(),
                rec.score,
                rec.tier.label()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format the full report as pretty JSON
pub fn format_json(report: &Report) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}
